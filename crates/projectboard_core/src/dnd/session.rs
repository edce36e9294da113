//! Drag session state machine.
//!
//! # Responsibility
//! - Walk one interaction through `Idle -> Dragging -> (Idle | dropped)`.
//! - Resolve a release over a zone into a store transition.
//!
//! # Invariants
//! - Exactly one payload exists while dragging, none while idle.
//! - Every drop path returns the session to `Idle`, store effect or not.

use crate::dnd::payload::DragPayload;
use crate::dnd::zone::DropZone;
use crate::model::project::ProjectId;
use crate::store::board_store::{BoardStore, TransitionOutcome};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Observable session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Protocol misuse by the caller, not a user-visible failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragProtocolError {
    /// `begin` while a drag is already in progress.
    AlreadyDragging,
    /// `drop_on` with no drag in progress.
    NotDragging,
}

impl Display for DragProtocolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDragging => write!(f, "a drag session is already in progress"),
            Self::NotDragging => write!(f, "no drag session is in progress"),
        }
    }
}

impl Error for DragProtocolError {}

/// How a release over a zone resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The record changed partitions; subscribers were notified once.
    Moved(ProjectId),
    /// Legal drop onto the partition the record already belongs to.
    AlreadyInPlace(ProjectId),
    /// The payload referenced a record the store no longer knows, or the
    /// zone refused the payload type; the platform discards the session.
    Rejected,
}

/// Ephemeral per-interaction move gesture.
///
/// One session instance can be reused across many gestures; it holds state
/// for at most one gesture at a time.
#[derive(Debug, Default)]
pub struct DragSession {
    payload: Option<DragPayload>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        if self.payload.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    /// Payload carried by the in-progress gesture, if any.
    pub fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    /// Starts dragging one record, building its move payload.
    ///
    /// # Errors
    /// - `AlreadyDragging` when a gesture is already in progress.
    pub fn begin(&mut self, id: ProjectId) -> Result<(), DragProtocolError> {
        if self.payload.is_some() {
            return Err(DragProtocolError::AlreadyDragging);
        }
        self.payload = Some(DragPayload::project_move(id));
        debug!("event=drag_started module=dnd status=ok id={id}");
        Ok(())
    }

    /// Platform signaled drag-end without a drop; returns to `Idle`.
    ///
    /// Tolerated in any state since the platform may signal drag-end at
    /// any time. Never touches the store.
    pub fn cancel(&mut self) {
        if self.payload.take().is_some() {
            debug!("event=drag_cancelled module=dnd status=ok");
        }
    }

    /// Releases the gesture over one zone.
    ///
    /// The zone's highlight is cleared and the session returns to `Idle`
    /// on every path. A zone that rejects the payload, or a payload whose
    /// id cannot be resolved, leaves the store untouched.
    ///
    /// # Errors
    /// - `NotDragging` when no gesture is in progress.
    pub fn drop_on(
        &mut self,
        zone: &mut DropZone,
        store: &mut BoardStore,
    ) -> Result<DropOutcome, DragProtocolError> {
        let payload = self.payload.take().ok_or(DragProtocolError::NotDragging)?;
        zone.drag_leave();

        if !zone.accepts(&payload) {
            debug!(
                "event=drop_rejected module=dnd status=noop reason=payload_type format={}",
                payload.format()
            );
            return Ok(DropOutcome::Rejected);
        }

        let Some(id) = payload.project_id() else {
            debug!("event=drop_rejected module=dnd status=noop reason=unresolvable_id");
            return Ok(DropOutcome::Rejected);
        };

        let target = zone.target_status();
        match store.transition(id, target) {
            TransitionOutcome::Applied => {
                info!("event=drop_applied module=dnd status=ok id={id} target={target}");
                Ok(DropOutcome::Moved(id))
            }
            TransitionOutcome::AlreadyInStatus => Ok(DropOutcome::AlreadyInPlace(id)),
            TransitionOutcome::UnknownId => {
                debug!("event=drop_rejected module=dnd status=noop reason=stale_id id={id}");
                Ok(DropOutcome::Rejected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DragProtocolError, DragSession, DragState};
    use uuid::Uuid;

    #[test]
    fn begin_moves_idle_to_dragging() {
        let mut session = DragSession::new();
        assert_eq!(session.state(), DragState::Idle);

        session.begin(Uuid::new_v4()).unwrap();
        assert_eq!(session.state(), DragState::Dragging);
        assert!(session.payload().is_some());
    }

    #[test]
    fn begin_twice_is_a_protocol_error() {
        let mut session = DragSession::new();
        session.begin(Uuid::new_v4()).unwrap();
        let err = session.begin(Uuid::new_v4()).unwrap_err();
        assert_eq!(err, DragProtocolError::AlreadyDragging);
    }

    #[test]
    fn cancel_is_tolerated_in_any_state() {
        let mut session = DragSession::new();
        session.cancel();
        assert_eq!(session.state(), DragState::Idle);

        session.begin(Uuid::new_v4()).unwrap();
        session.cancel();
        assert_eq!(session.state(), DragState::Idle);
        assert!(session.payload().is_none());
    }
}
