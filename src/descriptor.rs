//! Per-type default tables.
//!
//! A [`TypeDescriptor`] holds one [`DefaultEntry`] per declared field,
//! index-aligned with [`Record::fields`](crate::Record::fields). The factory
//! relies on that alignment: entry `i` is written into field `i`, names are
//! never looked up.

use std::any::TypeId;

use crate::parse::parse;
use crate::record::FieldDecl;
use crate::value::Value;

/// The cached default for one field. `None` leaves the field at its zero value.
pub type DefaultEntry = Option<Value>;

/// Builds the default entries for `fields`, in order.
///
/// An entry is absent when the field has no annotation, when the annotation
/// is empty, or when the text does not parse as the field's kind. The result
/// always has exactly one entry per field.
///
/// # Examples
///
/// ```
/// use preset::descriptor::build_entries;
/// use preset::{FieldDecl, Kind, Value};
///
/// let fields = [
///     FieldDecl::new("foo", Kind::Text, Some("bar"), true),
///     FieldDecl::new("empty", Kind::Text, None, true),
///     FieldDecl::new("check_uint", Kind::U32, Some("-1"), true),
/// ];
/// assert_eq!(
///     build_entries(&fields),
///     vec![Some(Value::Text("bar".to_string())), None, None],
/// );
/// ```
pub fn build_entries(fields: &[FieldDecl]) -> Vec<DefaultEntry> {
    fields
        .iter()
        .map(|field| match field.default_text() {
            None | Some("") => None,
            Some(text) => parse(field.kind(), text),
        })
        .collect()
}

/// The built, immutable default table of one record type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    type_id: TypeId,
    type_name: &'static str,
    fields: &'static [FieldDecl],
    entries: Vec<DefaultEntry>,
}

impl TypeDescriptor {
    /// Parses every annotation in `fields` into a new descriptor.
    pub fn build(type_id: TypeId, type_name: &'static str, fields: &'static [FieldDecl]) -> Self {
        let entries = build_entries(fields);
        let descriptor = Self {
            type_id,
            type_name,
            fields,
            entries,
        };
        tracing::debug!(
            type_name,
            fields = descriptor.len(),
            defaults = descriptor.present_count(),
            "built type descriptor"
        );
        descriptor
    }

    /// The identity of the described type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The described type's name, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Field declarations the descriptor was built from.
    pub fn fields(&self) -> &'static [FieldDecl] {
        self.fields
    }

    /// Default entries, index-aligned with [`fields`](Self::fields).
    pub fn entries(&self) -> &[DefaultEntry] {
        &self.entries
    }

    /// Default for the field at `index`, `None` when absent or out of range.
    pub fn entry(&self, index: usize) -> Option<&Value> {
        self.entries.get(index).and_then(Option::as_ref)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the type declares no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields that carry a default.
    pub fn present_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    /// Fields paired with their entries, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDecl, &DefaultEntry)> + '_ {
        self.fields.iter().zip(self.entries.iter())
    }
}
