//! Concurrent first use of the descriptor cache.
//!
//! Many threads race to create the same record type; exactly one of them
//! may build its descriptor and every thread must see complete defaults.

use std::sync::{Arc, Barrier};
use std::thread;

use preset::{DescriptorCache, Record};

const THREADS: usize = 16;

#[derive(Debug, Clone, PartialEq, Record)]
pub struct Shared {
    #[preset(default = "worker")]
    pub role: String,
    #[preset(default = "-7")]
    pub offset: i64,
    #[preset(default = "4096")]
    pub buffer: usize,
    #[preset(default = "true")]
    pub enabled: bool,
}

#[derive(Debug, Record)]
pub struct Other {
    #[preset(default = "2.5")]
    pub ratio: f64,
}

fn expected() -> Shared {
    Shared {
        role: "worker".to_string(),
        offset: -7,
        buffer: 4096,
        enabled: true,
    }
}

#[test]
fn racing_first_use_builds_once() {
    let cache = Arc::new(DescriptorCache::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache.create::<Shared>()
            })
        })
        .collect();

    for handle in handles {
        let created = handle.join().expect("worker thread panicked");
        assert_eq!(created, expected());
    }
    assert_eq!(cache.builds(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn racing_distinct_types_build_once_each() {
    let cache = DescriptorCache::new();
    let barrier = Barrier::new(THREADS);

    thread::scope(|scope| {
        for worker in 0..THREADS {
            let cache = &cache;
            let barrier = &barrier;
            scope.spawn(move || {
                barrier.wait();
                if worker % 2 == 0 {
                    assert_eq!(cache.create::<Shared>(), expected());
                } else {
                    assert_eq!(cache.create::<Other>().ratio, 2.5);
                }
            });
        }
    });

    assert_eq!(cache.builds(), 2);
    assert!(cache.contains::<Shared>());
    assert!(cache.contains::<Other>());
}

#[test]
fn global_cache_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(preset::descriptor::<Shared>))
        .collect();

    let descriptors: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker thread panicked"))
        .collect();

    for descriptor in &descriptors[1..] {
        assert!(Arc::ptr_eq(&descriptors[0], descriptor));
    }
}
