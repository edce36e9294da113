//! Drop zones, one per status partition.

use crate::dnd::payload::{DragPayload, TransferEffect, PROJECT_MOVE_FORMAT};
use crate::model::project::ProjectStatus;

/// Target area that can accept a project-move payload.
///
/// Zones are mutually exclusive targets; only the zone actually under the
/// pointer at release time receives the drop. The highlight flag models the
/// visual affordance toggled while a drag hovers the zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZone {
    target: ProjectStatus,
    highlighted: bool,
}

impl DropZone {
    pub fn new(target: ProjectStatus) -> Self {
        Self {
            target,
            highlighted: false,
        }
    }

    /// Status a record takes when dropped here.
    pub fn target_status(&self) -> ProjectStatus {
        self.target
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Capability check: does this zone support the payload's type?
    ///
    /// Only the well-known project-move format with move semantics is
    /// accepted; everything else must be rejected.
    pub fn accepts(&self, payload: &DragPayload) -> bool {
        payload.format() == PROJECT_MOVE_FORMAT && payload.effect() == TransferEffect::Move
    }

    /// Pointer entered the zone while dragging.
    ///
    /// Marks the zone as a valid target when it accepts the payload.
    /// Returns whether the payload was accepted.
    pub fn drag_enter(&mut self, payload: &DragPayload) -> bool {
        let accepted = self.accepts(payload);
        if accepted {
            self.highlighted = true;
        }
        accepted
    }

    /// Pointer left the zone without dropping; the affordance is cleared.
    pub fn drag_leave(&mut self) {
        self.highlighted = false;
    }
}
