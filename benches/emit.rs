use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use spinlog::{ColorMode, Console, RENDER_CAPACITY, Sink, Stream};
use std::hint::black_box;
use std::io;
use std::sync::Arc;
use std::thread;

/// Discards everything, so only rendering and locking are measured.
struct Discard;

impl Sink for Discard {
    fn write(&self, _stream: Stream, bytes: &[u8]) -> io::Result<()> {
        black_box(bytes);
        Ok(())
    }
}

fn console(colors: ColorMode) -> Console {
    Console::builder().colors(colors).sink(Discard).build()
}

fn bench_emit_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("Console::warn");

    let colored = console(ColorMode::Always);
    group.bench_function("colored", |b| {
        b.iter(|| colored.warn(format_args!("count={}", black_box(42))));
    });

    let plain = console(ColorMode::Never);
    group.bench_function("plain", |b| {
        b.iter(|| plain.warn(format_args!("count={}", black_box(42))));
    });

    group.finish();
}

fn bench_emit_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Console::error/size");
    let console = console(ColorMode::Always);

    for len in [16, 1024, RENDER_CAPACITY - 64, RENDER_CAPACITY * 4] {
        let body = "x".repeat(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &body, |b, body| {
            b.iter(|| console.error(format_args!("{}", black_box(body))));
        });
    }

    group.finish();
}

fn bench_emit_contended(c: &mut Criterion) {
    let console = Arc::new(console(ColorMode::Never));

    c.bench_function("Console::log/4 threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let console = Arc::clone(&console);
                    thread::spawn(move || {
                        for i in 0..64 {
                            console.log(format_args!("thread {t} line {i}"));
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        });
    });
}

criterion_group!(benches, bench_emit_stack, bench_emit_sizes, bench_emit_contended);
criterion_main!(benches);
