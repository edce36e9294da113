//! Core domain logic for the project board.
//! This crate is the single source of truth for business invariants.

pub mod dnd;
pub mod input;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use dnd::payload::{DragPayload, TransferEffect, PROJECT_MOVE_FORMAT};
pub use dnd::session::{DragProtocolError, DragSession, DragState, DropOutcome};
pub use dnd::zone::DropZone;
pub use input::draft::{DraftValidationError, ProjectDraft, MAX_PEOPLE, MIN_PEOPLE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    parse_project_status, Project, ProjectId, ProjectIdentityError, ProjectStatus,
};
pub use store::board_store::{BoardStore, TransitionOutcome};
pub use store::subscription::{Listener, SubscriptionId};
pub use view::{list_element_id, ViewComponent};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
