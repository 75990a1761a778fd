#![no_main]
use libfuzzer_sys::fuzz_target;
use spinlog::{Arg, PrintfTemplate};
use std::fmt::Write;

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let Ok(template) = PrintfTemplate::parse(data) else {
        return;
    };
    // Fields up to INT_MAX are valid but would only measure the allocator
    if template
        .directives()
        .any(|d| d.width().max(d.precision()).unwrap_or(0) > 4096)
    {
        return;
    }

    // Render with one argument of every kind per directive; mismatches may fail but not panic
    let args: Vec<Arg> = template
        .directives()
        .enumerate()
        .map(|(i, _)| match i % 5 {
            0 => Arg::Int(-12_345),
            1 => Arg::Uint(u64::MAX),
            2 => Arg::Float(1.0e300),
            3 => Arg::Str(data.to_string()),
            _ => Arg::Char('\u{1F980}'),
        })
        .collect();
    let mut out = String::new();
    let _ = write!(out, "{}", template.bind(&args));

    let words: Vec<&str> = data.split_whitespace().collect();
    let _ = template.coerce(&words);
});
