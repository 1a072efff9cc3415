//! Pure helpers behind `#[derive(Record)]`.
//!
//! Lives outside the proc-macro crate so the classification logic can be
//! exercised by property tests and fuzz targets, which cannot link against
//! a `proc-macro = true` crate.

#![warn(missing_docs)]

use syn::ext::IdentExt;
use syn::{GenericArgument, Ident, PathArguments, Type, TypePath, Visibility};

/// The kind a field type is classified as.
///
/// Mirrors `preset::Kind`; [`variant_name`](FieldKind::variant_name) is the
/// identifier the derive emits after `::preset::Kind::`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
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
    /// `Complex32` or `Complex<f32>`
    Complex32,
    /// `Complex64` or `Complex<f64>`
    Complex64,
    /// `bool`
    Bool,
    /// `String`
    Text,
    /// Anything else. Compiles, but never receives a default.
    Unsupported,
}

impl FieldKind {
    /// Name of the matching `preset::Kind` variant.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::Usize => "Usize",
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::Isize => "Isize",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::Complex32 => "Complex32",
            Self::Complex64 => "Complex64",
            Self::Bool => "Bool",
            Self::Text => "Text",
            Self::Unsupported => "Unsupported",
        }
    }

    /// Returns `true` unless the kind is [`Unsupported`](FieldKind::Unsupported).
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

/// Classifies a bare type name such as `u32` or `String`.
pub fn classify_name(name: &str) -> FieldKind {
    match name {
        "u8" => FieldKind::U8,
        "u16" => FieldKind::U16,
        "u32" => FieldKind::U32,
        "u64" => FieldKind::U64,
        "usize" => FieldKind::Usize,
        "i8" => FieldKind::I8,
        "i16" => FieldKind::I16,
        "i32" => FieldKind::I32,
        "i64" => FieldKind::I64,
        "isize" => FieldKind::Isize,
        "f32" => FieldKind::F32,
        "f64" => FieldKind::F64,
        "Complex32" => FieldKind::Complex32,
        "Complex64" => FieldKind::Complex64,
        "bool" => FieldKind::Bool,
        "String" => FieldKind::Text,
        _ => FieldKind::Unsupported,
    }
}

/// Classifies a field type by the last segment of its path.
///
/// `std::string::String` and `String` are both [`FieldKind::Text`];
/// `Complex<f32>` and `Complex<f64>` map to the complex kinds. References,
/// tuples, arrays, qualified paths and any path with generic arguments
/// other than `Complex<_>` are [`FieldKind::Unsupported`].
pub fn classify(ty: &Type) -> FieldKind {
    match ty {
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Path(TypePath { qself: None, path }) => {
            let Some(last) = path.segments.last() else {
                return FieldKind::Unsupported;
            };
            match &last.arguments {
                PathArguments::None => classify_name(&last.ident.to_string()),
                PathArguments::AngleBracketed(args) if last.ident == "Complex" => {
                    let mut args = args.args.iter();
                    match (args.next(), args.next()) {
                        (Some(GenericArgument::Type(inner)), None) => match classify(inner) {
                            FieldKind::F32 => FieldKind::Complex32,
                            FieldKind::F64 => FieldKind::Complex64,
                            _ => FieldKind::Unsupported,
                        },
                        _ => FieldKind::Unsupported,
                    }
                },
                _ => FieldKind::Unsupported,
            }
        },
        _ => FieldKind::Unsupported,
    }
}

/// The name recorded for a field: the identifier without any `r#` prefix,
/// or the position for tuple struct fields.
pub fn field_name(ident: Option<&Ident>, index: usize) -> String {
    match ident {
        Some(ident) => ident.unraw().to_string(),
        None => index.to_string(),
    }
}

/// Whether the derive may assign into a field with this visibility.
///
/// Private fields are not exported from their record and keep their zero
/// value; any `pub` form is writable.
pub fn is_writable(vis: &Visibility) -> bool {
    !matches!(vis, Visibility::Inherited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn classifies_primitives() {
        let cases: [(Type, FieldKind); 8] = [
            (parse_quote!(u8), FieldKind::U8),
            (parse_quote!(usize), FieldKind::Usize),
            (parse_quote!(i64), FieldKind::I64),
            (parse_quote!(f32), FieldKind::F32),
            (parse_quote!(bool), FieldKind::Bool),
            (parse_quote!(String), FieldKind::Text),
            (parse_quote!(std::string::String), FieldKind::Text),
            (parse_quote!(core::primitive::u16), FieldKind::U16),
        ];
        for (ty, expected) in cases {
            assert_eq!(classify(&ty), expected);
        }
    }

    #[test]
    fn classifies_complex() {
        let ty: Type = parse_quote!(num_complex::Complex<f64>);
        assert_eq!(classify(&ty), FieldKind::Complex64);
        let ty: Type = parse_quote!(Complex<f32>);
        assert_eq!(classify(&ty), FieldKind::Complex32);
        let ty: Type = parse_quote!(preset::Complex32);
        assert_eq!(classify(&ty), FieldKind::Complex32);
        let ty: Type = parse_quote!(Complex<i32>);
        assert_eq!(classify(&ty), FieldKind::Unsupported);
    }

    #[test]
    fn everything_else_is_unsupported() {
        let cases: [Type; 8] = [
            parse_quote!(Vec<String>),
            parse_quote!(Option<u8>),
            parse_quote!(&'static str),
            parse_quote!((u8, u8)),
            parse_quote!([u8; 4]),
            parse_quote!(u128),
            parse_quote!(char),
            parse_quote!(<Foo as Bar>::Out),
        ];
        for ty in cases {
            assert_eq!(classify(&ty), FieldKind::Unsupported);
        }
    }

    #[test]
    fn field_names() {
        let ident: Ident = parse_quote!(r#type);
        assert_eq!(field_name(Some(&ident), 0), "type");
        assert_eq!(field_name(None, 2), "2");
    }

    #[test]
    fn writability_follows_visibility() {
        assert!(is_writable(&parse_quote!(pub)));
        assert!(is_writable(&parse_quote!(pub(crate))));
        assert!(!is_writable(&Visibility::Inherited));
    }
}
