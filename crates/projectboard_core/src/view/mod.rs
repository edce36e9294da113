//! View-side collaborators over the board store's read API.
//!
//! # Responsibility
//! - Define the small capability set every view variant implements.
//! - Own the stable element naming used to locate render targets.
//!
//! # Invariants
//! - Views only consume `subscribe`/`partition`; they never hold mutable
//!   access to store records.

use crate::model::project::ProjectStatus;
use crate::store::board_store::BoardStore;

pub mod project_list;

/// Capability set for concrete view variants; plain composition, no
/// inheritance hierarchy.
pub trait ViewComponent {
    /// Wires the view to a store (subscriptions, initial paint).
    fn configure(&mut self, store: &mut BoardStore);

    /// Current rendered output of this view.
    fn rendered(&self) -> String;
}

/// Stable id of the render target for one status partition.
///
/// Naming convention only the view layer relies on; the store knows
/// nothing about it.
pub fn list_element_id(status: ProjectStatus) -> String {
    format!("{status}-projects-list")
}
