//! Typed default values and the field types they map onto.

use num_complex::{Complex32, Complex64};

use crate::kind::Kind;

/// A parsed default value.
///
/// Each variant pairs with exactly one supported [`Kind`]; there is no
/// variant for [`Kind::Unsupported`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `u8` value
    U8(u8),
    /// `u16` value
    U16(u16),
    /// `u32` value
    U32(u32),
    /// `u64` value
    U64(u64),
    /// `usize` value
    Usize(usize),
    /// `i8` value
    I8(i8),
    /// `i16` value
    I16(i16),
    /// `i32` value
    I32(i32),
    /// `i64` value
    I64(i64),
    /// `isize` value
    Isize(isize),
    /// `f32` value
    F32(f32),
    /// `f64` value
    F64(f64),
    /// `Complex<f32>` value
    Complex32(Complex32),
    /// `Complex<f64>` value
    Complex64(Complex64),
    /// `bool` value
    Bool(bool),
    /// `String` value
    Text(String),
}

impl Value {
    /// The kind of field this value can be assigned to.
    pub fn kind(&self) -> Kind {
        match self {
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::Usize(_) => Kind::Usize,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::Isize(_) => Kind::Isize,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::Complex32(_) => Kind::Complex32,
            Self::Complex64(_) => Kind::Complex64,
            Self::Bool(_) => Kind::Bool,
            Self::Text(_) => Kind::Text,
        }
    }

    /// Converts into the native field type, or hands the value back when
    /// `T` is the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use preset::Value;
    ///
    /// assert_eq!(Value::I32(-42).into_native::<i32>(), Ok(-42));
    /// assert_eq!(Value::I32(-42).into_native::<i64>(), Err(Value::I32(-42)));
    /// ```
    pub fn into_native<T: Primitive>(self) -> Result<T, Value> {
        T::from_value(self)
    }
}

/// A Rust type that a supported [`Kind`] maps to.
///
/// Generated [`Record::assign`](crate::Record::assign) implementations call
/// [`from_value`](Primitive::from_value) to move a cached default into a
/// field.
pub trait Primitive: Sized {
    /// The kind of fields declared with this type.
    const KIND: Kind;

    /// Unwraps a value of the matching variant, returning any other variant
    /// unchanged.
    fn from_value(value: Value) -> Result<Self, Value>;

    /// Wraps a native value.
    fn into_value(self) -> Value;
}

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const KIND: Kind = Kind::$variant;

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )*
    };
}

impl_primitive! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    f32 => F32,
    f64 => F64,
    Complex32 => Complex32,
    Complex64 => Complex64,
    bool => Bool,
    String => Text,
}
