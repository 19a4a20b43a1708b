//! Concurrent batch sealing.
//!
//! A batch is split into contiguous per-worker chunks up front
//! ([`partition`]), each worker seals its chunk sequentially into a
//! disjoint sub-slice of one preallocated output buffer ([`worker`]), and
//! the coordinator joins every worker before returning ([`encrypt`]).
//!
//! Work is statically partitioned, so no queues or channels are involved:
//! output order matches input order because each slot is written by
//! exactly one worker at its record's original index, not because of any
//! scheduling order. The only synchronisation point is the final join.

pub mod encrypt;
pub(crate) mod partition;
pub(crate) mod worker;

pub use encrypt::BatchCrypter;
