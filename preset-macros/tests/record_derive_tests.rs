//! Integration tests for `#[derive(Record)]`
//!
//! These compile real structs through the derive and check the generated
//! `Record` impl against `preset`'s runtime.

use pretty_assertions::assert_eq;
use preset::{AssignError, Complex32, Complex64, DescriptorCache, Kind, Record, Value};

#[derive(Debug, PartialEq, Record)]
pub struct Everything {
    #[preset(default = "8")]
    pub a_u8: u8,
    #[preset(default = "16")]
    pub a_u16: u16,
    #[preset(default = "32")]
    pub a_u32: u32,
    #[preset(default = "64")]
    pub a_u64: u64,
    #[preset(default = "99")]
    pub a_usize: usize,
    #[preset(default = "-8")]
    pub a_i8: i8,
    #[preset(default = "-16")]
    pub a_i16: i16,
    #[preset(default = "-32")]
    pub a_i32: i32,
    #[preset(default = "-64")]
    pub a_i64: i64,
    #[preset(default = "-99")]
    pub a_isize: isize,
    #[preset(default = "0.5")]
    pub a_f32: f32,
    #[preset(default = "-2.25")]
    pub a_f64: f64,
    #[preset(default = "1+2i")]
    pub a_c32: Complex32,
    #[preset(default = "(3-4i)")]
    pub a_c64: preset::Complex<f64>,
    #[preset(default = "true")]
    pub a_bool: bool,
    #[preset(default = "hello")]
    pub a_string: std::string::String,
}

#[test]
fn every_supported_kind_gets_its_default() {
    let created: Everything = DescriptorCache::new().create();
    assert_eq!(
        created,
        Everything {
            a_u8: 8,
            a_u16: 16,
            a_u32: 32,
            a_u64: 64,
            a_usize: 99,
            a_i8: -8,
            a_i16: -16,
            a_i32: -32,
            a_i64: -64,
            a_isize: -99,
            a_f32: 0.5,
            a_f64: -2.25,
            a_c32: Complex32::new(1.0, 2.0),
            a_c64: Complex64::new(3.0, -4.0),
            a_bool: true,
            a_string: "hello".to_string(),
        }
    );
}

#[test]
fn declared_kinds_follow_field_types() {
    let kinds: Vec<Kind> = Everything::fields().iter().map(|f| f.kind()).collect();
    let expected: Vec<Kind> = Kind::ALL
        .iter()
        .copied()
        .filter(|k| k.is_supported())
        .collect();
    assert_eq!(kinds, expected);
}

#[derive(Debug, Record)]
pub struct Access {
    #[preset(default = "1")]
    pub open: u8,
    #[preset(default = "2")]
    pub(crate) crate_open: u8,
    #[preset(default = "3")]
    closed: u8,
}

#[test]
fn private_fields_keep_zero_value() {
    let created: Access = DescriptorCache::new().create();
    assert_eq!(created.open, 1);
    assert_eq!(created.crate_open, 2);
    assert_eq!(created.closed, 0);

    let decls = Access::fields();
    assert!(decls[0].is_writable());
    assert!(decls[1].is_writable());
    assert!(!decls[2].is_writable());
}

#[test]
fn assign_reports_problems() {
    let mut target = Access::zeroed();
    assert_eq!(
        target.assign(2, Value::U8(3)),
        Err(AssignError::NotWritable { field: "closed" })
    );
    assert_eq!(
        target.assign(0, Value::Bool(true)),
        Err(AssignError::KindMismatch {
            field: "open",
            expected: Kind::U8,
            found: Kind::Bool,
        })
    );
    assert_eq!(
        target.assign(3, Value::U8(1)),
        Err(AssignError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(target.assign(0, Value::U8(42)), Ok(()));
    assert_eq!(target.open, 42);
}

#[derive(Debug, Record)]
pub struct Leftovers {
    #[preset(default = "a,b")]
    pub tags: Vec<String>,
    #[preset(default = "5")]
    pub maybe: Option<u8>,
    #[preset(default = "170141183460469231731687303715884105727")]
    pub wide: u128,
    #[preset(default = "x")]
    pub letter: char,
    #[preset(default = "7")]
    pub after: u8,
}

#[test]
fn unsupported_types_are_accepted_without_defaults() {
    let created: Leftovers = DescriptorCache::new().create();
    assert!(created.tags.is_empty());
    assert_eq!(created.maybe, None);
    assert_eq!(created.wide, 0);
    assert_eq!(created.letter, '\0');
    // a later supported field still lines up with its own default
    assert_eq!(created.after, 7);

    let mut target = Leftovers::zeroed();
    assert_eq!(
        target.assign(0, Value::Text("a".to_string())),
        Err(AssignError::Unsupported { field: "tags" })
    );
}

#[derive(Debug, PartialEq, Record)]
pub struct Pair(#[preset(default = "7")] pub u16, pub bool, #[preset(default = "t")] pub bool);

#[test]
fn tuple_structs_use_positional_names() {
    let created: Pair = DescriptorCache::new().create();
    assert_eq!(created, Pair(7, false, true));

    let names: Vec<&str> = Pair::fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["0", "1", "2"]);
}

#[derive(Debug, PartialEq, Record)]
pub struct Marker;

#[test]
fn unit_structs_have_no_fields() {
    let created: Marker = DescriptorCache::new().create();
    assert_eq!(created, Marker);
    assert!(Marker::fields().is_empty());
}

#[derive(Debug, Record)]
pub struct Tagged<T> {
    #[preset(default = "tagged")]
    pub label: String,
    pub payload: T,
}

#[test]
fn generic_instantiations_are_distinct_types() {
    let cache = DescriptorCache::new();
    let first: Tagged<u8> = cache.create();
    let second: Tagged<Vec<u8>> = cache.create();

    assert_eq!(first.label, "tagged");
    assert_eq!(second.label, "tagged");
    assert_eq!(first.payload, 0);
    assert_eq!(cache.len(), 2);
}

#[derive(Debug, PartialEq, Record)]
pub struct Wrapper<T>(pub T, #[preset(default = "3")] pub u8);

#[test]
fn unbounded_type_params_are_zeroed_through_default() {
    let created: Wrapper<String> = DescriptorCache::new().create();
    assert_eq!(created, Wrapper(String::new(), 3));
    assert_eq!(Wrapper::<Vec<u8>>::zeroed(), Wrapper(Vec::new(), 0));
}

#[derive(Debug, Record)]
pub struct RawNames {
    #[preset(default = "kw")]
    pub r#type: String,
}

#[test]
fn raw_identifiers_are_unprefixed() {
    assert_eq!(RawNames::fields()[0].name(), "type");
    let created: RawNames = DescriptorCache::new().create();
    assert_eq!(created.r#type, "kw");
}
