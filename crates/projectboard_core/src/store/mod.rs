//! Board state container and change notification.
//!
//! # Responsibility
//! - Hold the single authoritative collection of project records.
//! - Fan out snapshot notifications to registered listeners.
//!
//! # Invariants
//! - The store is the only writer of record status.
//! - Every real mutation notifies each subscriber exactly once.

pub mod board_store;
pub mod subscription;
