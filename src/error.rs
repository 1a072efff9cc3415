//! Error types for parsing and assigning defaults.
//!
//! Neither type ever escapes [`create`](crate::create): both exist so the
//! reason a default was dropped can be logged and inspected.

use thiserror::Error;

use crate::kind::Kind;

/// Why an annotation text did not produce a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The annotation text was empty
    #[error("empty default for {kind} field")]
    Empty {
        /// The target kind
        kind: Kind,
    },

    /// A negative literal was given for an unsigned kind
    #[error("'{text}' is negative but {kind} is unsigned")]
    Negative {
        /// The target kind
        kind: Kind,
        /// The rejected text
        text: String,
    },

    /// The literal is well formed but does not fit the kind's width
    #[error("'{text}' is out of range for {kind}")]
    OutOfRange {
        /// The target kind
        kind: Kind,
        /// The rejected text
        text: String,
    },

    /// The text is not a literal of the kind
    #[error("'{text}' is not a valid {kind}")]
    Malformed {
        /// The target kind
        kind: Kind,
        /// The rejected text
        text: String,
    },

    /// The field type cannot carry a default
    #[error("{kind} fields cannot carry a default")]
    Unsupported {
        /// The target kind
        kind: Kind,
    },
}

impl ParseError {
    /// The kind the text was parsed against.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Empty { kind }
            | Self::Negative { kind, .. }
            | Self::OutOfRange { kind, .. }
            | Self::Malformed { kind, .. }
            | Self::Unsupported { kind } => *kind,
        }
    }
}

/// Why a value could not be written into a record field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// The field is private to its record
    #[error("field '{field}' is not writable")]
    NotWritable {
        /// The field name
        field: &'static str,
    },

    /// The value's kind differs from the field's declared kind
    #[error("field '{field}' expects {expected}, got {found}")]
    KindMismatch {
        /// The field name
        field: &'static str,
        /// The field's declared kind
        expected: Kind,
        /// The kind of the rejected value
        found: Kind,
    },

    /// The field's type cannot carry a default
    #[error("field '{field}' has a type that cannot carry a default")]
    Unsupported {
        /// The field name
        field: &'static str,
    },

    /// No field exists at this index
    #[error("field index {index} out of range for a record with {len} fields")]
    OutOfRange {
        /// The requested index
        index: usize,
        /// The record's field count
        len: usize,
    },
}
