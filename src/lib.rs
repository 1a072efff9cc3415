//! Annotation-driven default values for freshly constructed records.
//!
//! A record type declares a textual default per field. The first time an
//! instance of that type is requested, every annotation is parsed into the
//! field's native type and the result is cached for the rest of the
//! process. Every later [`create`] call reuses the cached values without
//! touching the annotation text again.
//!
//! # Module Organization
//!
//! - [`parse`] - text to typed value conversion, one rule per [`Kind`]
//! - [`descriptor`] - per-type default tables built from field declarations
//! - [`cache`] - process-wide, build-once descriptor cache
//! - [`factory`] - [`create`] and friends, the public entry points
//! - [`record`] - the [`Record`] introspection trait the derive implements
//! - [`error`] - parse and assignment errors
//!
//! # Example
//!
//! ```
//! use preset::Record;
//!
//! #[derive(Debug, Record)]
//! pub struct Settings {
//!     #[preset(default = "localhost")]
//!     pub host: String,
//!     #[preset(default = "8080")]
//!     pub port: u16,
//!     #[preset(default = "-1")]
//!     pub retries: u32,
//!     pub verbose: bool,
//! }
//!
//! let settings: Settings = preset::create();
//! assert_eq!(settings.host, "localhost");
//! assert_eq!(settings.port, 8080);
//! // "-1" is not a valid u32, so the field keeps its zero value
//! assert_eq!(settings.retries, 0);
//! assert!(!settings.verbose);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

// Lets `#[derive(Record)]` expand to `::preset::...` paths inside this crate too.
extern crate self as preset;

pub mod cache;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod kind;
pub mod parse;
pub mod record;
pub mod value;

pub use cache::DescriptorCache;
pub use descriptor::{DefaultEntry, TypeDescriptor};
pub use error::{AssignError, ParseError};
pub use factory::{create, descriptor, populate};
pub use kind::Kind;
pub use parse::{parse, try_parse};
pub use record::{FieldDecl, Record};
pub use value::{Primitive, Value};

/// Complex number types used by [`Kind::Complex32`] and [`Kind::Complex64`] fields.
pub use num_complex::{Complex, Complex32, Complex64};

/// Derive macro implementing [`Record`] for structs.
///
/// Annotate fields with `#[preset(default = "...")]`. Only non-private
/// fields receive defaults; private fields keep their zero value.
#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use preset_macros::Record;
