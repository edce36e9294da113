//! Drag-and-drop transfer protocol.
//!
//! # Responsibility
//! - Track the ephemeral drag session from grab to release.
//! - Gate drops behind capability-style payload acceptance checks.
//!
//! # Invariants
//! - A session carries at most one payload, and only while dragging.
//! - Zone highlight state is a local affordance, never a store mutation.

pub mod payload;
pub mod session;
pub mod zone;
