//! Domain model for board-managed project records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep a single record shape shared by both status partitions.
//!
//! # Invariants
//! - Every domain object is identified by a stable `ProjectId`.
//! - No delete exists; a record lives for its store's lifetime.

pub mod project;
