//! The introspection surface a record type exposes.
//!
//! [`Record`] is normally implemented by `#[derive(Record)]`, which reads
//! `#[preset(default = "...")]` field attributes and classifies each field
//! type into a [`Kind`]. Hand-written implementations are fine as long as
//! [`Record::fields`] and [`Record::assign`] agree on field indices.

use crate::error::AssignError;
use crate::kind::Kind;
use crate::value::Value;

/// One declared field of a record type, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    name: &'static str,
    kind: Kind,
    default: Option<&'static str>,
    writable: bool,
}

impl FieldDecl {
    /// Declares a field.
    ///
    /// `default` is the raw annotation text, `None` when the field carries no
    /// annotation. `writable` is `false` for fields the factory must leave
    /// alone.
    pub const fn new(
        name: &'static str,
        kind: Kind,
        default: Option<&'static str>,
        writable: bool,
    ) -> Self {
        Self {
            name,
            kind,
            default,
            writable,
        }
    }

    /// Field name. Tuple struct fields are named by position (`"0"`, `"1"`, ...).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Raw default annotation, if any.
    pub fn default_text(&self) -> Option<&'static str> {
        self.default
    }

    /// Whether the factory may assign into this field.
    pub fn is_writable(&self) -> bool {
        self.writable
    }
}

/// A record type whose instances can be created with defaults applied.
///
/// # Examples
///
/// ```
/// use preset::{AssignError, FieldDecl, Kind, Record, Value};
///
/// #[derive(Debug, Default)]
/// struct Point {
///     x: i32,
///     label: String,
/// }
///
/// impl Record for Point {
///     fn fields() -> &'static [FieldDecl] {
///         const FIELDS: &[FieldDecl] = &[
///             FieldDecl::new("x", Kind::I32, Some("-3"), true),
///             FieldDecl::new("label", Kind::Text, Some("origin"), true),
///         ];
///         FIELDS
///     }
///
///     fn zeroed() -> Self {
///         Self::default()
///     }
///
///     fn assign(&mut self, index: usize, value: Value) -> Result<(), AssignError> {
///         match (index, value) {
///             (0, Value::I32(x)) => self.x = x,
///             (1, Value::Text(label)) => self.label = label,
///             (0 | 1, other) => {
///                 let field = Self::fields()[index];
///                 return Err(AssignError::KindMismatch {
///                     field: field.name(),
///                     expected: field.kind(),
///                     found: other.kind(),
///                 });
///             },
///             _ => return Err(AssignError::OutOfRange { index, len: 2 }),
///         }
///         Ok(())
///     }
/// }
///
/// let point: Point = preset::create();
/// assert_eq!(point.x, -3);
/// assert_eq!(point.label, "origin");
/// ```
pub trait Record: Sized + 'static {
    /// Field declarations in declaration order.
    fn fields() -> &'static [FieldDecl];

    /// An instance with every field at its zero value.
    fn zeroed() -> Self;

    /// Writes `value` into the field at `index`.
    ///
    /// Implementations reject indices past the last field, values of the
    /// wrong kind, and fields that are not writable.
    fn assign(&mut self, index: usize, value: Value) -> Result<(), AssignError>;
}
