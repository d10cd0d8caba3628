//! Tag filtering: vocabulary extraction, selection state and the
//! visibility predicate.
//!
//! # Responsibility
//! - Derive the category/tag vocabulary from the eligible pool.
//! - Track per-category selections with bulk and snapshot operations.
//! - Decide project visibility with AND-across / OR-within semantics.
//!
//! # Invariants
//! - The vocabulary is rebuilt from the pool, never patched in place.
//! - Predicate evaluation is a pure function of (project, state).

pub mod predicate;
pub mod state;
pub mod vocabulary;
