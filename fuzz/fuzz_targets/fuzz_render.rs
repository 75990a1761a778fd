#![no_main]
use libfuzzer_sys::fuzz_target;
use spinlog::{CaptureSink, ColorMode, Console, Severity, Stream};

fuzz_target!(|data: &str| {
    // Every message must come out byte-identical behind its prefix, on either path
    let sink = CaptureSink::new();
    let console = Console::builder()
        .colors(ColorMode::Never)
        .sink(sink.clone())
        .build();
    console.emit_str(Severity::Error, Some(data));

    let expected = format!("[error]: {data}\n");
    assert_eq!(sink.text(Stream::Stderr), expected);
});
