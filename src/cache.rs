//! Build-once descriptor cache.
//!
//! [`DescriptorCache`] maps a type's [`TypeId`] to its [`TypeDescriptor`].
//! Entries are inserted on first request and never replaced or removed, so
//! every caller after the first sees the same `Arc`.
//!
//! # Concurrency
//!
//! The map is a [`DashMap`]. A miss builds the descriptor inside the shard's
//! entry lock, so concurrent first requests for the same type build it
//! exactly once and nobody observes a half-built descriptor. Building never
//! calls back into the cache.

use std::any::{type_name, TypeId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::descriptor::TypeDescriptor;
use crate::record::{FieldDecl, Record};

/// The process-wide cache used by [`create`](crate::create).
static GLOBAL: OnceLock<DescriptorCache> = OnceLock::new();

/// A thread-safe, insert-only map from type identity to descriptor.
///
/// # Examples
///
/// ```
/// use preset::{DescriptorCache, Record};
///
/// #[derive(Record)]
/// pub struct Limits {
///     #[preset(default = "16")]
///     pub max_conns: usize,
/// }
///
/// let cache = DescriptorCache::new();
/// let first = cache.get_or_build::<Limits>();
/// let second = cache.get_or_build::<Limits>();
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.builds(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DescriptorCache {
    descriptors: DashMap<TypeId, Arc<TypeDescriptor>>,
    builds: AtomicUsize,
}

impl DescriptorCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            descriptors: DashMap::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// The process-wide cache, created empty on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Returns the descriptor for `T`, building it from `T::fields()` on the
    /// first request.
    pub fn get_or_build<T: Record>(&self) -> Arc<TypeDescriptor> {
        self.get_or_build_with(TypeId::of::<T>(), type_name::<T>(), T::fields)
    }

    /// Returns the descriptor stored under `type_id`, building it from the
    /// declarations `fields` yields when none is stored yet.
    ///
    /// `fields` is only called on a miss.
    pub fn get_or_build_with<F>(
        &self,
        type_id: TypeId,
        type_name: &'static str,
        fields: F,
    ) -> Arc<TypeDescriptor>
    where
        F: FnOnce() -> &'static [FieldDecl],
    {
        if let Some(found) = self.descriptors.get(&type_id) {
            return Arc::clone(found.value());
        }

        let entry = self.descriptors.entry(type_id).or_insert_with(|| {
            self.builds.fetch_add(1, Ordering::Relaxed);
            Arc::new(TypeDescriptor::build(type_id, type_name, fields()))
        });
        Arc::clone(entry.value())
    }

    /// The descriptor for `T`, if one has been built.
    pub fn get<T: Record>(&self) -> Option<Arc<TypeDescriptor>> {
        self.descriptors
            .get(&TypeId::of::<T>())
            .map(|found| Arc::clone(found.value()))
    }

    /// Returns `true` once a descriptor for `T` has been built.
    pub fn contains<T: Record>(&self) -> bool {
        self.descriptors.contains_key(&TypeId::of::<T>())
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Number of descriptors this cache has built.
    ///
    /// Equal to [`len`](Self::len); a higher count would mean a type's
    /// annotations were parsed more than once.
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}
