//! Tests for runtime printf templates.

use spinlog::fmt::Conversion;
use spinlog::{Arg, Error, PrintfTemplate};
use std::fmt::Write as _;

fn render(template: &str, args: &[Arg]) -> String {
    let template = PrintfTemplate::parse(template).unwrap();
    template.bind(args).to_string()
}

#[test]
fn literal_only() {
    assert_eq!(render("plain text", &[]), "plain text");
    assert_eq!(render("", &[]), "");
}

#[test]
fn percent_escape() {
    assert_eq!(render("100%%", &[]), "100%");
    assert_eq!(PrintfTemplate::parse("50%% done").unwrap().directive_count(), 0);
}

#[test]
fn signed_integers() {
    assert_eq!(render("count=%d", &[42.into()]), "count=42");
    assert_eq!(render("%i", &[Arg::Int(-7)]), "-7");
    assert_eq!(render("%+d", &[5.into()]), "+5");
    assert_eq!(render("% d", &[5.into()]), " 5");
    assert_eq!(render("%05d", &[Arg::Int(-42)]), "-0042");
    assert_eq!(render("%.3d", &[7.into()]), "007");
    assert_eq!(render("[%.0d]", &[0.into()]), "[]");
}

#[test]
fn width_and_alignment() {
    assert_eq!(render("[%5d]", &[42.into()]), "[   42]");
    assert_eq!(render("[%-5d]", &[42.into()]), "[42   ]");
    assert_eq!(render("[%10s]", &["hi".into()]), "[        hi]");
    assert_eq!(render("[%-4s]", &["ab".into()]), "[ab  ]");
}

#[test]
fn zero_flag_ignored_with_left_or_integer_precision() {
    assert_eq!(render("[%-05d]", &[3.into()]), "[3    ]");
    assert_eq!(render("[%06.3d]", &[3.into()]), "[   003]");
}

#[test]
fn unsigned_hex_octal() {
    assert_eq!(render("%u", &[Arg::Uint(3_000_000_000)]), "3000000000");
    assert_eq!(render("%x", &[255u32.into()]), "ff");
    assert_eq!(render("%X", &[255u32.into()]), "FF");
    assert_eq!(render("%#x", &[255u32.into()]), "0xff");
    assert_eq!(render("%#X", &[255u32.into()]), "0XFF");
    assert_eq!(render("%#x", &[0u32.into()]), "0");
    assert_eq!(render("%o", &[8u32.into()]), "10");
    assert_eq!(render("%#o", &[8u32.into()]), "010");
    assert_eq!(render("%08x", &[0xbeefu32.into()]), "0000beef");
}

#[test]
fn length_modifiers_are_accepted() {
    assert_eq!(render("%ld %lld %hhu %zu", &[1.into(), 2.into(), 3u32.into(), 4usize.into()]), "1 2 3 4");
}

#[test]
fn fixed_point() {
    assert_eq!(render("%f", &[1.5.into()]), "1.500000");
    assert_eq!(render("%.2f", &[1.23456.into()]), "1.23");
    assert_eq!(render("[%7.1f]", &[1.23456.into()]), "[    1.2]");
    assert_eq!(render("%+.1f", &[2.0.into()]), "+2.0");
    assert_eq!(render("%.0f", &[2.0.into()]), "2");
    assert_eq!(render("%#.0f", &[2.0.into()]), "2.");
    assert_eq!(render("%08.2f", &[Arg::Float(-1.5)]), "-0001.50");
}

#[test]
fn exponent_form() {
    assert_eq!(render("%e", &[1500.0.into()]), "1.500000e+03");
    assert_eq!(render("%.2e", &[1500.0.into()]), "1.50e+03");
    assert_eq!(render("%.1E", &[0.00025.into()]), "2.5E-04");
    assert_eq!(render("%.0e", &[0.0.into()]), "0e+00");
}

#[test]
fn general_form() {
    assert_eq!(render("%g", &[0.0001.into()]), "0.0001");
    assert_eq!(render("%g", &[100_000.0.into()]), "100000");
    assert_eq!(render("%g", &[1_234_567.0.into()]), "1.23457e+06");
    assert_eq!(render("%G", &[0.000_012_5.into()]), "1.25E-05");
    assert_eq!(render("%g", &[2.5.into()]), "2.5");
}

#[test]
fn non_finite_floats() {
    assert_eq!(render("%f", &[f64::INFINITY.into()]), "inf");
    assert_eq!(render("%F", &[f64::NEG_INFINITY.into()]), "-INF");
    assert_eq!(render("%f", &[f64::NAN.into()]), "nan");
}

#[test]
fn strings_and_chars() {
    assert_eq!(render("%s", &["hello".into()]), "hello");
    assert_eq!(render("%.3s", &["abcdef".into()]), "abc");
    assert_eq!(render("%s", &[42.into()]), "42");
    assert_eq!(render("%c", &['x'.into()]), "x");
    assert_eq!(render("%c", &[65.into()]), "A");
    assert_eq!(render("%3c", &['z'.into()]), "  z");
}

#[test]
fn string_width_and_precision_count_bytes() {
    assert_eq!(render("[%5s]", &["é".into()]), "[   é]");
    assert_eq!(render("[%-4s]", &["ñ".into()]), "[ñ  ]");
    assert_eq!(render("%.3s", &["héllo".into()]), "hé");
    // Never cuts a character in half.
    assert_eq!(render("%.2s", &["héllo".into()]), "h");
    assert_eq!(render("%.1s", &["日本".into()]), "");
}

#[test]
fn mixed_template() {
    let out = render(
        "%s: %d files, %.1f%% done",
        &["sync".into(), 12.into(), 87.5.into()],
    );
    assert_eq!(out, "sync: 12 files, 87.5% done");
}

#[test]
fn unsupported_conversion_is_an_error() {
    assert!(matches!(PrintfTemplate::parse("%q"), Err(Error::Template(_))));
    assert!(matches!(PrintfTemplate::parse("trailing %"), Err(Error::Template(_))));
    assert!(matches!(PrintfTemplate::parse("%n"), Err(Error::Template(_))));
}

#[test]
fn field_sizes_beyond_int_max_are_rejected() {
    for template in ["%99999999999999999d", "%.99999999999d", "%2147483648s", "x %.2147483648f"] {
        assert!(
            matches!(PrintfTemplate::parse(template), Err(Error::Template(_))),
            "{template}"
        );
    }

    let template = PrintfTemplate::parse("%2147483647d %.f").unwrap();
    let fields: Vec<_> = template.directives().map(|d| (d.width(), d.precision())).collect();
    assert_eq!(fields, vec![(Some(2_147_483_647), None), (None, Some(0))]);
}

#[test]
fn directives_expose_conversions() {
    let template = PrintfTemplate::parse("%d %x %s %g").unwrap();
    let conversions: Vec<_> = template.directives().map(|d| d.conversion()).collect();
    assert_eq!(
        conversions,
        vec![
            Conversion::Signed,
            Conversion::Hex { upper: false },
            Conversion::Str,
            Conversion::General { upper: false },
        ]
    );
    assert_eq!(template.as_str(), "%d %x %s %g");
}

#[test]
fn missing_argument_fails_render() {
    let template = PrintfTemplate::parse("%d and %d").unwrap();
    let args = [Arg::Int(1)];
    let mut out = String::new();
    assert!(write!(out, "{}", template.bind(&args)).is_err());
}

#[test]
fn mistyped_argument_fails_render() {
    let template = PrintfTemplate::parse("%d").unwrap();
    let args = [Arg::Str("nope".into())];
    let mut out = String::new();
    assert!(write!(out, "{}", template.bind(&args)).is_err());
}

#[test]
fn extra_arguments_are_ignored() {
    assert_eq!(render("%d", &[1.into(), 2.into()]), "1");
}

#[test]
fn coerce_words_per_directive() {
    let template = PrintfTemplate::parse("%s %d %u %x %f %c").unwrap();
    let args = template
        .coerce(&["disk", "-3", "7", "0xff", "2.5", "q"])
        .unwrap();
    assert_eq!(
        args,
        vec![
            Arg::Str("disk".into()),
            Arg::Int(-3),
            Arg::Uint(7),
            Arg::Uint(255),
            Arg::Float(2.5),
            Arg::Str("q".into()),
        ]
    );
    assert_eq!(template.bind(&args).to_string(), "disk -3 7 ff 2.500000 q");
}

#[test]
fn coerce_accepts_full_signed_range() {
    let template = PrintfTemplate::parse("%d %d").unwrap();
    let args = template
        .coerce(&["-9223372036854775808", "9223372036854775807"])
        .unwrap();
    assert_eq!(args, vec![Arg::Int(i64::MIN), Arg::Int(i64::MAX)]);
    assert_eq!(
        template.bind(&args).to_string(),
        "-9223372036854775808 9223372036854775807"
    );
    assert!(template.coerce(&["-9223372036854775809", "0"]).is_err());
}

#[test]
fn coerce_rejects_wrong_count() {
    let template = PrintfTemplate::parse("%d %d").unwrap();
    let err = template.coerce(&["1"]).unwrap_err();
    assert!(err.to_string().contains("expects 2 argument(s), got 1"));
}

#[test]
fn coerce_rejects_non_numbers() {
    let template = PrintfTemplate::parse("%d").unwrap();
    assert!(matches!(template.coerce(&["ten"]), Err(Error::Template(_))));
}
