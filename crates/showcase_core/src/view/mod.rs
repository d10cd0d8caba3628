//! Display projection.
//!
//! # Responsibility
//! - Project the visible set into presentation-agnostic display records.
//! - Keep badge and recency derivation pure and DOM-free.
//!
//! # Invariants
//! - Projection never mutates the project collection.
//! - An empty visible set yields a placeholder, not an empty grid.

pub mod display;
