//! Text to typed value conversion.
//!
//! [`parse`] is the lenient entry point used when building descriptors: any
//! text that is not a valid literal for the target [`Kind`] yields `None`.
//! [`try_parse`] is the same conversion with the reason kept.
//!
//! | kind | accepted text |
//! |---|---|
//! | unsigned integers | ASCII digits only, base 10, within the type's width |
//! | signed integers | optional `+`/`-` then digits, within the type's width |
//! | `f32`, `f64` | float literals, including `inf` and `NaN` |
//! | `Complex32`, `Complex64` | `re`, `imi` or `re±imi` with no spaces, optionally in parentheses |
//! | `bool` | `1 t T TRUE true True` and `0 f F FALSE false False` |
//! | `String` | anything non-empty, verbatim |
//!
//! A negative literal for an unsigned kind is always rejected, it never
//! wraps around.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use num_complex::Complex;
use num_traits::Float;

use crate::error::ParseError;
use crate::kind::Kind;
use crate::value::Value;

/// Parses `text` as a value of `kind`, returning `None` when it cannot.
///
/// # Examples
///
/// ```
/// use preset::{parse, Kind, Value};
///
/// assert_eq!(parse(Kind::I32, "-42"), Some(Value::I32(-42)));
/// assert_eq!(parse(Kind::U32, "-1"), None);
/// assert_eq!(parse(Kind::Bool, "T"), Some(Value::Bool(true)));
/// assert_eq!(parse(Kind::Text, ""), None);
/// ```
pub fn parse(kind: Kind, text: &str) -> Option<Value> {
    match try_parse(kind, text) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::trace!(kind = %kind, text, error = %err, "ignoring default");
            None
        },
    }
}

/// Parses `text` as a value of `kind`, reporting why it could not.
///
/// # Examples
///
/// ```
/// use preset::{try_parse, Kind, ParseError};
///
/// let err = try_parse(Kind::U16, "70000").unwrap_err();
/// assert!(matches!(err, ParseError::OutOfRange { .. }));
/// ```
pub fn try_parse(kind: Kind, text: &str) -> Result<Value, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty { kind });
    }

    match kind {
        Kind::U8 => unsigned(kind, text).map(Value::U8),
        Kind::U16 => unsigned(kind, text).map(Value::U16),
        Kind::U32 => unsigned(kind, text).map(Value::U32),
        Kind::U64 => unsigned(kind, text).map(Value::U64),
        Kind::Usize => unsigned(kind, text).map(Value::Usize),
        Kind::I8 => signed(kind, text).map(Value::I8),
        Kind::I16 => signed(kind, text).map(Value::I16),
        Kind::I32 => signed(kind, text).map(Value::I32),
        Kind::I64 => signed(kind, text).map(Value::I64),
        Kind::Isize => signed(kind, text).map(Value::Isize),
        Kind::F32 => float(kind, text).map(Value::F32),
        Kind::F64 => float(kind, text).map(Value::F64),
        Kind::Complex32 => complex(kind, text).map(Value::Complex32),
        Kind::Complex64 => complex(kind, text).map(Value::Complex64),
        Kind::Bool => boolean(kind, text).map(Value::Bool),
        Kind::Text => Ok(Value::Text(text.to_owned())),
        Kind::Unsupported => Err(ParseError::Unsupported { kind }),
    }
}

fn unsigned<T>(kind: Kind, text: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    if text.starts_with('-') {
        return Err(ParseError::Negative {
            kind,
            text: text.to_owned(),
        });
    }
    // `str::parse` would also take a leading '+'
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(kind, text));
    }
    text.parse().map_err(|err| integer_error(kind, text, &err))
}

fn signed<T>(kind: Kind, text: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    text.parse().map_err(|err| integer_error(kind, text, &err))
}

fn integer_error(kind: Kind, text: &str, err: &ParseIntError) -> ParseError {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::OutOfRange {
            kind,
            text: text.to_owned(),
        },
        _ => malformed(kind, text),
    }
}

fn float<T>(kind: Kind, text: &str) -> Result<T, ParseError>
where
    T: Float + FromStr,
{
    float_literal(text).map_err(|err| err.into_parse_error(kind, text))
}

/// Accepts `re`, `im` followed by `i`, or `re` and a signed `im` followed by
/// `i`. Both parts must be plain float literals, so there is no whitespace,
/// and `i` alone or `1+i` is malformed. Each part is range-checked on its own.
fn complex<T>(kind: Kind, text: &str) -> Result<Complex<T>, ParseError>
where
    T: Float + FromStr,
{
    let literal = text
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(text);

    let (re, im) = match literal.strip_suffix('i') {
        None => (float_literal(literal), Ok(T::zero())),
        Some(body) => match imaginary_split(body) {
            Some(at) => (float_literal(&body[..at]), float_literal(&body[at..])),
            None => (Ok(T::zero()), float_literal(body)),
        },
    };

    match (re, im) {
        (Ok(re), Ok(im)) => Ok(Complex::new(re, im)),
        (Err(FloatError::Malformed), _) | (_, Err(FloatError::Malformed)) => {
            Err(malformed(kind, text))
        },
        (Err(err), _) | (_, Err(err)) => Err(err.into_parse_error(kind, text)),
    }
}

/// Byte offset of the sign that starts the imaginary part of `re±im`, if
/// there is a real part. Signs inside an exponent (`1e-3`) do not count.
fn imaginary_split(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len()).rev().find(|&at| {
        matches!(bytes[at], b'+' | b'-') && !matches!(bytes[at - 1], b'e' | b'E')
    })
}

/// Why a float literal was rejected, before the kind and text are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FloatError {
    Malformed,
    Overflow,
}

impl FloatError {
    fn into_parse_error(self, kind: Kind, text: &str) -> ParseError {
        match self {
            Self::Malformed => malformed(kind, text),
            Self::Overflow => ParseError::OutOfRange {
                kind,
                text: text.to_owned(),
            },
        }
    }
}

fn float_literal<T>(text: &str) -> Result<T, FloatError>
where
    T: Float + FromStr,
{
    let value: T = text.parse().map_err(|_| FloatError::Malformed)?;
    if value.is_infinite() && !spells_infinity(text) {
        return Err(FloatError::Overflow);
    }
    Ok(value)
}

fn boolean(kind: Kind, text: &str) -> Result<bool, ParseError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(malformed(kind, text)),
    }
}

/// An infinite result is only legitimate when the literal asked for it.
fn spells_infinity(text: &str) -> bool {
    text.to_ascii_lowercase().contains("inf")
}

fn malformed(kind: Kind, text: &str) -> ParseError {
    ParseError::Malformed {
        kind,
        text: text.to_owned(),
    }
}
