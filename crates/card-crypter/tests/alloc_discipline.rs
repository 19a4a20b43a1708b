//! Allocation discipline of the sealing hot path.
//!
//! The engine promises at most a trivial allocation for an empty batch
//! and amortized ~1 allocation per record (the output string) for a
//! populated batch. A counting global allocator keeps that promise
//! honest, so regressions like per-record ciphertext buffers show up as
//! test failures rather than as rotation-job slowdowns.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use card_crypter::{BatchCrypter, Card, CardNumber};

struct CountingAllocator;

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator;

fn allocations_during(f: impl FnOnce()) -> usize {
    let before = ALLOCATIONS.load(Ordering::Relaxed);
    f();
    ALLOCATIONS.load(Ordering::Relaxed) - before
}

// One test function on purpose: a sibling test running in parallel would
// pollute the global counter.
#[test]
fn hot_path_allocation_budget() {
    let key = b"0123456789abcdef0123456789abcdef";

    let crypter = BatchCrypter::with_workers(4);
    let allocs = allocations_during(|| {
        let sealed = crypter.encrypt(&[], key).unwrap();
        assert!(sealed.is_empty());
    });
    assert!(allocs <= 1, "empty batch allocated {allocs} times");

    let cards: Vec<Card> = (0..100)
        .map(|i| {
            let number: CardNumber = format!("{i:016}").parse().unwrap();
            Card::new(i.to_string(), number)
        })
        .collect();

    // Single worker: the spawn overhead is one fixed cost, every other
    // allocation on the path is per-record.
    let crypter = BatchCrypter::with_workers(1);
    crypter.encrypt(&cards, key).unwrap(); // warm-up

    let mut sealed = Vec::new();
    let allocs = allocations_during(|| {
        sealed = crypter.encrypt(&cards, key).unwrap();
    });

    assert_eq!(sealed.len(), cards.len());
    assert!(
        allocs / cards.len() <= 1,
        "amortized allocations too high: {allocs} for {} records",
        cards.len()
    );
}
