//! Declared field kinds.

use std::fmt;

/// The declared kind of a record field.
///
/// One variant per primitive type that can carry a default, plus
/// [`Unsupported`](Kind::Unsupported) for every other field type. Matching on
/// `Kind` is exhaustive, so adding a supported type means touching every
/// place that dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// Single precision complex, `Complex<f32>`
    Complex32,
    /// Double precision complex, `Complex<f64>`
    Complex64,
    /// `bool`
    Bool,
    /// `String`
    Text,
    /// Any other field type. Never carries a default.
    Unsupported,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 17] = [
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::Usize,
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::Isize,
        Kind::F32,
        Kind::F64,
        Kind::Complex32,
        Kind::Complex64,
        Kind::Bool,
        Kind::Text,
        Kind::Unsupported,
    ];

    /// Rust spelling of the kind's native type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Complex32 => "Complex32",
            Self::Complex64 => "Complex64",
            Self::Bool => "bool",
            Self::Text => "String",
            Self::Unsupported => "unsupported",
        }
    }

    /// Returns `true` for kinds that can carry a default value.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Returns `true` for the unsigned integer kinds.
    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize
        )
    }

    /// Returns `true` for the signed integer kinds.
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
