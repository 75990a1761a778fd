//! C-style `printf` templates for callers that only have a template string at runtime
//! (the CLI, the REPL, scripts piping JSON). Rust callers use the macros and
//! `format_args!` instead.
//!
//! A parsed template is bound to its arguments and rendered through `Display`, so it
//! travels down the same emit path as any other message. An argument that is missing
//! or of the wrong kind makes `Display` return `fmt::Error`, which the console treats
//! as a formatting fault.

use crate::Error;
use regex::Regex;
use std::fmt::{self, Write as _};
use std::sync::LazyLock;

// flags, width, precision, length modifier (accepted and ignored), conversion
static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^%([-+ #0]*)(\d+)?(?:\.(\d*))?(hh|h|ll|l|j|z|t|L)?([diuxXoscfFeEgG%])")
        .expect("Invalid directive regex")
});

/// Largest field C's printf can report (`INT_MAX`). Widths and precisions above it are
/// rejected when parsing, longer fields fail when rendering.
const MAX_FIELD: usize = 0x7fff_ffff;

const SPACES: &str = "                                ";
const ZEROS: &str = "00000000000000000000000000000000";

/// A single argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Char(char),
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u64> for Arg {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<u32> for Arg {
    fn from(v: u32) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<usize> for Arg {
    fn from(v: usize) -> Self {
        Self::Uint(v as u64)
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<char> for Arg {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// Conversion character of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `%d`, `%i`
    Signed,
    /// `%u`
    Unsigned,
    /// `%x`, `%X`
    Hex { upper: bool },
    /// `%o`
    Octal,
    /// `%s`
    Str,
    /// `%c`
    Char,
    /// `%f`, `%F`
    Fixed { upper: bool },
    /// `%e`, `%E`
    Exp { upper: bool },
    /// `%g`, `%G`
    General { upper: bool },
}

impl Conversion {
    const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' | 'i' => Self::Signed,
            'u' => Self::Unsigned,
            'x' => Self::Hex { upper: false },
            'X' => Self::Hex { upper: true },
            'o' => Self::Octal,
            's' => Self::Str,
            'c' => Self::Char,
            'f' => Self::Fixed { upper: false },
            'F' => Self::Fixed { upper: true },
            'e' => Self::Exp { upper: false },
            'E' => Self::Exp { upper: true },
            'g' => Self::General { upper: false },
            'G' => Self::General { upper: true },
            _ => return None,
        })
    }

    const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Signed | Self::Unsigned | Self::Hex { .. } | Self::Octal
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    left: bool,
    plus: bool,
    space: bool,
    alt: bool,
    zero: bool,
}

impl Flags {
    fn parse(s: &str) -> Self {
        let mut flags = Self::default();
        for c in s.chars() {
            match c {
                '-' => flags.left = true,
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                '#' => flags.alt = true,
                '0' => flags.zero = true,
                _ => {}
            }
        }
        flags
    }
}

/// One `%…` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
}

impl Directive {
    #[must_use]
    pub const fn conversion(&self) -> Conversion {
        self.conversion
    }

    #[must_use]
    pub const fn width(&self) -> Option<usize> {
        self.width
    }

    #[must_use]
    pub const fn precision(&self) -> Option<usize> {
        self.precision
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Literal(String),
    Directive(Directive),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintfTemplate {
    source: String,
    pieces: Vec<Piece>,
}

impl PrintfTemplate {
    /// Splits `template` into literal runs and directives. `%%` folds into the literal text.
    ///
    /// # Errors
    /// `Error::Template` for a `%` that does not start a supported directive.
    pub fn parse(template: &str) -> Result<Self, Error> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(pos) = rest.find('%') {
            literal.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            let Some(caps) = DIRECTIVE_REGEX.captures(tail) else {
                let offset = template.len() - tail.len();
                return Err(Error::Template(format!(
                    "unsupported conversion at byte {offset}"
                )));
            };
            let consumed = caps.get(0).map_or(1, |m| m.end());
            let conv_char = caps
                .get(5)
                .and_then(|m| m.as_str().chars().next())
                .unwrap_or('%');

            if conv_char == '%' {
                literal.push('%');
            } else {
                let conversion = Conversion::from_char(conv_char).ok_or_else(|| {
                    Error::Template(format!("unsupported conversion '%{conv_char}'"))
                })?;
                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(Piece::Directive(Directive {
                    flags: Flags::parse(caps.get(1).map_or("", |m| m.as_str())),
                    width: caps
                        .get(2)
                        .map(|m| field_size("width", m.as_str()))
                        .transpose()?,
                    // A bare '.' means precision zero, as in C.
                    precision: caps
                        .get(3)
                        .map(|m| match m.as_str() {
                            "" => Ok(0),
                            digits => field_size("precision", digits),
                        })
                        .transpose()?,
                    conversion,
                }));
            }
            rest = &tail[consumed..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self {
            source: template.to_string(),
            pieces,
        })
    }

    /// The template text as given to `parse`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.pieces.iter().filter_map(|p| match p {
            Piece::Directive(d) => Some(d),
            Piece::Literal(_) => None,
        })
    }

    #[must_use]
    pub fn directive_count(&self) -> usize {
        self.directives().count()
    }

    /// Converts command-line words into typed arguments, one per directive, the way
    /// `printf(1)` reads its operands.
    ///
    /// # Errors
    /// `Error::Template` when the word count differs from the directive count or a word
    /// does not parse as the number its directive needs.
    pub fn coerce<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Arg>, Error> {
        let expected = self.directive_count();
        if words.len() != expected {
            return Err(Error::Template(format!(
                "template expects {expected} argument(s), got {}",
                words.len()
            )));
        }

        self.directives()
            .zip(words)
            .map(|(directive, word)| coerce_word(directive.conversion, word.as_ref()))
            .collect()
    }

    /// Pairs the template with its arguments for rendering.
    #[must_use]
    pub fn bind<'a>(&'a self, args: &'a [Arg]) -> Bound<'a> {
        Bound {
            template: self,
            args,
        }
    }
}

fn field_size(what: &str, digits: &str) -> Result<usize, Error> {
    digits
        .parse::<usize>()
        .ok()
        .filter(|&n| n <= MAX_FIELD)
        .ok_or_else(|| Error::Template(format!("{what} {digits} is larger than {MAX_FIELD}")))
}

fn coerce_word(conversion: Conversion, word: &str) -> Result<Arg, Error> {
    let bad = || Error::Template(format!("invalid number: '{word}'"));
    match conversion {
        Conversion::Signed => parse_int(word).map(Arg::Int).ok_or_else(bad),
        Conversion::Unsigned | Conversion::Hex { .. } | Conversion::Octal => {
            if word.trim_start().starts_with('-') {
                parse_int(word).map(Arg::Int).ok_or_else(bad)
            } else {
                parse_uint(word).map(Arg::Uint).ok_or_else(bad)
            }
        }
        Conversion::Fixed { .. } | Conversion::Exp { .. } | Conversion::General { .. } => {
            word.trim().parse::<f64>().map(Arg::Float).map_err(|_| bad())
        }
        Conversion::Str | Conversion::Char => Ok(Arg::Str(word.to_string())),
    }
}

fn parse_int(word: &str) -> Option<i64> {
    let word = word.trim();
    let (negative, digits) = match word.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, word.strip_prefix('+').unwrap_or(word)),
    };
    let magnitude = parse_uint(digits)?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn parse_uint(word: &str) -> Option<u64> {
    let word = word.trim();
    let word = word.strip_prefix('+').unwrap_or(word);
    if let Some(hex) = word.strip_prefix("0x").or_else(|| word.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        word.parse().ok()
    }
}

/// A template bound to its arguments. Extra arguments are ignored; a missing or
/// mistyped one fails the render.
#[derive(Debug, Clone, Copy)]
pub struct Bound<'a> {
    template: &'a PrintfTemplate,
    args: &'a [Arg],
}

impl fmt::Display for Bound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut args = self.args.iter();
        for piece in &self.template.pieces {
            match piece {
                Piece::Literal(text) => f.write_str(text)?,
                Piece::Directive(directive) => {
                    let arg = args.next().ok_or(fmt::Error)?;
                    write_directive(f, directive, arg)?;
                }
            }
        }
        Ok(())
    }
}

fn write_directive(f: &mut fmt::Formatter<'_>, d: &Directive, arg: &Arg) -> fmt::Result {
    match d.conversion {
        Conversion::Signed => {
            let v = match *arg {
                Arg::Int(v) => v,
                Arg::Uint(v) => v as i64,
                Arg::Char(c) => i64::from(u32::from(c)),
                _ => return Err(fmt::Error),
            };
            let sign = sign_prefix(v < 0, d.flags);
            let digits = int_digits(v.unsigned_abs(), 10, false, d.precision);
            pad(f, d, sign, &digits, true)
        }
        Conversion::Unsigned | Conversion::Hex { .. } | Conversion::Octal => {
            let v = match *arg {
                Arg::Int(v) => v as u64,
                Arg::Uint(v) => v,
                Arg::Char(c) => u64::from(u32::from(c)),
                _ => return Err(fmt::Error),
            };
            let (radix, upper) = match d.conversion {
                Conversion::Hex { upper } => (16, upper),
                Conversion::Octal => (8, false),
                _ => (10, false),
            };
            let mut digits = int_digits(v, radix, upper, d.precision);
            let mut prefix = "";
            if d.flags.alt {
                match d.conversion {
                    Conversion::Hex { upper } if v != 0 => {
                        prefix = if upper { "0X" } else { "0x" };
                    }
                    Conversion::Octal if !digits.starts_with('0') => digits.insert(0, '0'),
                    _ => {}
                }
            }
            pad(f, d, prefix, &digits, true)
        }
        Conversion::Fixed { upper } | Conversion::Exp { upper } | Conversion::General { upper } => {
            let v = match *arg {
                Arg::Float(v) => v,
                Arg::Int(v) => v as f64,
                Arg::Uint(v) => v as f64,
                _ => return Err(fmt::Error),
            };
            let sign = sign_prefix(v.is_sign_negative() && !v.is_nan(), d.flags);
            if !v.is_finite() {
                let body = match (v.is_nan(), upper) {
                    (true, false) => "nan",
                    (true, true) => "NAN",
                    (false, false) => "inf",
                    (false, true) => "INF",
                };
                return pad(f, d, sign, body, false);
            }
            let body = float_body(v.abs(), d);
            pad(f, d, sign, &body, true)
        }
        Conversion::Str => {
            let text = match arg {
                Arg::Str(s) => s.clone(),
                other => plain_text(other),
            };
            // Precision counts bytes, as in C, without splitting a character.
            let end = match d.precision {
                Some(p) if p < text.len() => (0..=p)
                    .rev()
                    .find(|&i| text.is_char_boundary(i))
                    .unwrap_or(0),
                _ => text.len(),
            };
            pad(f, d, "", &text[..end], false)
        }
        Conversion::Char => {
            let c = match *arg {
                Arg::Char(c) => Some(c),
                Arg::Int(v) => u32::try_from(v).ok().and_then(char::from_u32),
                Arg::Uint(v) => u32::try_from(v).ok().and_then(char::from_u32),
                Arg::Str(ref s) => s.chars().next(),
                Arg::Float(_) => return Err(fmt::Error),
            };
            let mut text = String::new();
            if let Some(c) = c {
                text.push(c);
            }
            pad(f, d, "", &text, false)
        }
    }
}

fn plain_text(arg: &Arg) -> String {
    match arg {
        Arg::Int(v) => v.to_string(),
        Arg::Uint(v) => v.to_string(),
        Arg::Float(v) => format!("{v:.6}"),
        Arg::Str(s) => s.clone(),
        Arg::Char(c) => c.to_string(),
    }
}

const fn sign_prefix(negative: bool, flags: Flags) -> &'static str {
    if negative {
        "-"
    } else if flags.plus {
        "+"
    } else if flags.space {
        " "
    } else {
        ""
    }
}

fn int_digits(v: u64, radix: u32, upper: bool, precision: Option<usize>) -> String {
    // `%.0d` with a zero value prints no digits at all.
    if v == 0 && precision == Some(0) {
        return String::new();
    }
    let mut digits = match (radix, upper) {
        (16, false) => format!("{v:x}"),
        (16, true) => format!("{v:X}"),
        (8, _) => format!("{v:o}"),
        _ => v.to_string(),
    };
    if let Some(p) = precision
        && digits.len() < p
    {
        digits.insert_str(0, &"0".repeat(p - digits.len()));
    }
    digits
}

fn float_body(v: f64, d: &Directive) -> String {
    let alt = d.flags.alt;
    match d.conversion {
        Conversion::Fixed { .. } => {
            let p = d.precision.unwrap_or(6);
            let mut s = format!("{v:.p$}");
            if alt && p == 0 {
                s.push('.');
            }
            s
        }
        Conversion::Exp { upper } => {
            let p = d.precision.unwrap_or(6);
            exp_form(v, p, upper, alt)
        }
        Conversion::General { upper } => {
            let p = d.precision.unwrap_or(6).max(1);
            let exponent = decimal_exponent(v, p);
            let p_i = i32::try_from(p).unwrap_or(i32::MAX);
            let mut s = if exponent >= -4 && exponent < p_i {
                let frac = usize::try_from(p_i - 1 - exponent).unwrap_or(0);
                let mut s = format!("{v:.frac$}");
                if alt && frac == 0 {
                    s.push('.');
                }
                s
            } else {
                exp_form(v, p - 1, upper, alt)
            };
            if !alt {
                s = strip_trailing_zeros(&s);
            }
            s
        }
        _ => String::new(),
    }
}

/// Exponent of `v` once rounded to `significant` digits.
fn decimal_exponent(v: f64, significant: usize) -> i32 {
    if v == 0.0 {
        return 0;
    }
    let p = significant - 1;
    let s = format!("{v:.p$e}");
    s.split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

/// C renders exponents with an explicit sign and at least two digits (`1.5e+00`).
fn exp_form(v: f64, precision: usize, upper: bool, alt: bool) -> String {
    let s = format!("{v:.precision$e}");
    let (mantissa, exponent) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut out = String::with_capacity(mantissa.len() + 5);
    out.push_str(mantissa);
    if alt && precision == 0 {
        out.push('.');
    }
    out.push(if upper { 'E' } else { 'e' });
    out.push(if exponent < 0 { '-' } else { '+' });
    let _ = write!(out, "{:02}", exponent.unsigned_abs());
    out
}

fn strip_trailing_zeros(s: &str) -> String {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => s.split_at(i),
        None => (s, ""),
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    format!("{mantissa}{exponent}")
}

fn pad(
    f: &mut fmt::Formatter<'_>,
    d: &Directive,
    prefix: &str,
    body: &str,
    numeric: bool,
) -> fmt::Result {
    let len = prefix.len() + body.len();
    let fill = d.width.unwrap_or(0).saturating_sub(len);
    if len + fill > MAX_FIELD {
        return Err(fmt::Error);
    }

    // C ignores '0' when '-' is given, and for integers when a precision is given.
    let zero_fill = numeric
        && d.flags.zero
        && !d.flags.left
        && !(d.conversion.is_integer() && d.precision.is_some());

    if d.flags.left {
        f.write_str(prefix)?;
        f.write_str(body)?;
        write_repeat(f, SPACES, fill)
    } else if zero_fill {
        f.write_str(prefix)?;
        write_repeat(f, ZEROS, fill)?;
        f.write_str(body)
    } else {
        write_repeat(f, SPACES, fill)?;
        f.write_str(prefix)?;
        f.write_str(body)
    }
}

/// Writes `n` bytes of fill, one run of `fill` at a time.
fn write_repeat(f: &mut fmt::Formatter<'_>, fill: &str, mut n: usize) -> fmt::Result {
    while n > 0 {
        let take = n.min(fill.len());
        f.write_str(&fill[..take])?;
        n -= take;
    }
    Ok(())
}
