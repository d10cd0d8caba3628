//! Domain model for the project showcase catalog.
//!
//! # Responsibility
//! - Define the canonical project record loaded from the catalog document.
//! - Keep activity metadata optional so sparse catalogs stay valid.
//!
//! # Invariants
//! - Records are immutable after load; the session owns the collection.
//! - Hidden status is a display filter, never an access control.

pub mod activity;
pub mod project;
