//! Static work partitioning: how many workers run and which contiguous
//! index range each one owns.

use std::ops::Range;

/// Number of workers that will actually run for a batch.
///
/// Never more than there are records — extra workers would sit idle while
/// still costing a thread each — and never less than one, so the hint
/// bounds concurrency by available parallelism rather than batch size.
pub(crate) fn effective_workers(hint: usize, records: usize) -> usize {
    hint.min(records.max(1))
}

/// Split `records` indices into `workers` contiguous ranges.
///
/// Chunk sizes differ by at most one, with earlier workers taking the
/// larger chunks, so wall time is governed by `ceil(records / workers)`
/// sequential seals. Requires `1 <= workers <= records`.
pub(crate) fn chunk_ranges(records: usize, workers: usize) -> Vec<Range<usize>> {
    debug_assert!(workers >= 1 && workers <= records);
    let base = records / workers;
    let extra = records % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let len = base + usize::from(i < extra);
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}
