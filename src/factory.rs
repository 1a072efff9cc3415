//! Creating records with their defaults applied.
//!
//! [`create`] never fails. Every anomaly on the way (bad annotation text,
//! unsupported field type, private field, a rejected assignment) leaves the
//! affected field at its zero value and construction carries on.

use std::sync::Arc;

use crate::cache::DescriptorCache;
use crate::descriptor::TypeDescriptor;
use crate::record::Record;

/// Creates a `T` with every field at its zero value, then applies the
/// defaults cached for `T`.
///
/// The first call for a given `T` parses its annotations; later calls reuse
/// the process-wide cache.
///
/// # Examples
///
/// ```
/// use preset::Record;
///
/// #[derive(Debug, Record)]
/// pub struct DefaultTest {
///     #[preset(default = "bar")]
///     pub foo: String,
///     #[preset(default = "star")]
///     pub rock: String,
///     pub empty: String,
///     #[preset(default = "-42")]
///     pub check_int: i32,
///     #[preset(default = "-1")]
///     pub check_uint: u32,
/// }
///
/// let created: DefaultTest = preset::create();
/// assert_eq!(created.foo, "bar");
/// assert_eq!(created.rock, "star");
/// assert_eq!(created.empty, "");
/// assert_eq!(created.check_int, -42);
/// assert_eq!(created.check_uint, 0);
/// ```
pub fn create<T: Record>() -> T {
    DescriptorCache::global().create()
}

/// Applies the cached defaults for `T` to an existing instance.
///
/// Fields without a default are left as they are.
pub fn populate<T: Record>(target: &mut T) {
    DescriptorCache::global().populate(target);
}

/// The process-wide descriptor for `T`, built if this is the first request.
pub fn descriptor<T: Record>() -> Arc<TypeDescriptor> {
    DescriptorCache::global().get_or_build::<T>()
}

impl DescriptorCache {
    /// Creates a `T` with defaults applied from this cache.
    pub fn create<T: Record>(&self) -> T {
        let mut instance = T::zeroed();
        self.populate(&mut instance);
        instance
    }

    /// Applies this cache's defaults for `T` to an existing instance.
    pub fn populate<T: Record>(&self, target: &mut T) {
        let descriptor = self.get_or_build::<T>();
        apply(&descriptor, target);
    }
}

fn apply<T: Record>(descriptor: &TypeDescriptor, target: &mut T) {
    for (index, (field, entry)) in descriptor.iter().enumerate() {
        let Some(value) = entry else {
            continue;
        };

        if !field.is_writable() {
            tracing::debug!(
                type_name = descriptor.type_name(),
                field = field.name(),
                "skipping default for non-writable field"
            );
            continue;
        }

        if let Err(err) = target.assign(index, value.clone()) {
            tracing::warn!(
                type_name = descriptor.type_name(),
                field = field.name(),
                error = %err,
                "failed to assign default"
            );
        }
    }
}
