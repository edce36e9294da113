//! Typed drag payload carried between source record and drop zones.

use crate::model::project::ProjectId;
use uuid::Uuid;

/// Well-known format marker for project-move payloads.
///
/// Zones must reject any payload whose format they do not recognize.
pub const PROJECT_MOVE_FORMAT: &str = "application/x-projectboard-id";

/// Transfer semantics carried alongside the payload data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferEffect {
    /// Source record leaves its old partition on drop.
    Move,
    /// Duplication semantics; produced by no session in this system and
    /// rejected by every zone.
    Copy,
}

/// String-typed payload identifying the record being dragged.
///
/// The id travels as text, mirroring platform data-transfer channels; a
/// stale or forged id is tolerated downstream as a no-op transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    format: &'static str,
    data: String,
    effect: TransferEffect,
}

impl DragPayload {
    /// Builds a move payload for one project record.
    pub fn project_move(id: ProjectId) -> Self {
        Self {
            format: PROJECT_MOVE_FORMAT,
            data: id.to_string(),
            effect: TransferEffect::Move,
        }
    }

    /// Builds a payload with an arbitrary format tag and effect.
    ///
    /// Exists so zones can be exercised against foreign payloads; sessions
    /// only ever produce `project_move` payloads.
    pub fn foreign(format: &'static str, data: impl Into<String>, effect: TransferEffect) -> Self {
        Self {
            format,
            data: data.into(),
            effect,
        }
    }

    pub fn format(&self) -> &str {
        self.format
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn effect(&self) -> TransferEffect {
        self.effect
    }

    /// Reads the carried project id back out of the string data.
    ///
    /// Returns `None` for foreign formats and unparseable ids; callers
    /// treat both as a discarded drop rather than an error.
    pub fn project_id(&self) -> Option<ProjectId> {
        if self.format != PROJECT_MOVE_FORMAT {
            return None;
        }
        Uuid::parse_str(&self.data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::{DragPayload, TransferEffect, PROJECT_MOVE_FORMAT};
    use uuid::Uuid;

    #[test]
    fn move_payload_round_trips_the_id() {
        let id = Uuid::new_v4();
        let payload = DragPayload::project_move(id);
        assert_eq!(payload.format(), PROJECT_MOVE_FORMAT);
        assert_eq!(payload.effect(), TransferEffect::Move);
        assert_eq!(payload.project_id(), Some(id));
    }

    #[test]
    fn foreign_format_yields_no_project_id() {
        let payload = DragPayload::foreign("text/plain", "hello", TransferEffect::Move);
        assert_eq!(payload.project_id(), None);
    }

    #[test]
    fn garbage_data_yields_no_project_id() {
        let payload = DragPayload::foreign(PROJECT_MOVE_FORMAT, "not-a-uuid", TransferEffect::Move);
        assert_eq!(payload.project_id(), None);
    }
}
