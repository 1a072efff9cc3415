//! Procedural macros for preset.
//!
//! Provides `#[derive(Record)]`, which implements `preset::Record` for a
//! struct from its field declarations and `#[preset(default = "...")]`
//! field attributes.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod record;

/// Derives `preset::Record`.
///
/// # Field attributes
///
/// - `#[preset(default = "text")]` - default value in textual form, parsed
///   once per process into the field's type. Empty text means no default.
///
/// Only non-private fields receive defaults. Every field type must
/// implement `Default`, which supplies the zero value; type parameters are
/// bounded by `'static + Default` in the generated impl.
///
/// # Example
///
/// ```ignore
/// use preset::Record;
///
/// #[derive(Record)]
/// pub struct DefaultTest {
///     #[preset(default = "bar")]
///     pub foo: String,
///     #[preset(default = "-42")]
///     pub check_int: i32,
/// }
///
/// let created: DefaultTest = preset::create();
/// ```
#[proc_macro_derive(Record, attributes(preset))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand_record(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
