//! Tests for 256-color escapes.

use spinlog::fmt::colorize;
use spinlog::{Color256, Severity};

#[test]
fn severity_palette() {
    assert_eq!(Color256::ORANGE.index(), 202);
    assert_eq!(Color256::RED.index(), 160);
    assert_eq!(Color256::GREEN.index(), 40);
    assert_eq!(Color256::PINK.index(), 167);
}

#[test]
fn escapes() {
    assert_eq!(Color256(202).fg_ansi(), "\x1b[38;5;202m");
    assert_eq!(Color256::RESET, "\x1b[0m");
}

#[test]
fn colorize_wraps_text() {
    assert_eq!(colorize("hi", Color256::GREEN), "\x1b[38;5;40mhi\x1b[0m");
}

#[test]
fn prefixes_use_the_descriptor_color() {
    for severity in [Severity::Warn, Severity::Error, Severity::Log, Severity::Debug] {
        let d = severity.descriptor();
        let color = d.color.unwrap();
        assert_eq!(d.prefix, colorize(d.plain_prefix, color), "{severity}");
    }
}
