//! Session and visibility control.
//!
//! # Responsibility
//! - Own the loaded collection, the eligible pool and the filter state.
//! - Gate hidden projects via the query flag or the reveal latch.
//!
//! # Invariants
//! - Hidden status is a display filter, not an access control.
//! - Visibility changes rebuild vocabulary and state from the new pool.

pub mod context;
pub mod reveal;
