//! Form-side input handling.
//!
//! # Responsibility
//! - Shape raw user input into creation requests for the board store.
//! - Enforce input validation before anything reaches the store.

pub mod draft;
