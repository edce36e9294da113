//! Authoritative project store.
//!
//! # Responsibility
//! - Own the full collection of project records in insertion order.
//! - Apply creations and status transitions, notifying on real change only.
//!
//! # Invariants
//! - Record ids issued by `create` are unique for the store's lifetime.
//! - `transition` with an unknown id or an unchanged status is a silent
//!   no-op and fires no notification.
//! - Snapshots handed to listeners are defensive copies.

use crate::input::draft::ProjectDraft;
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::subscription::{Listener, SubscriberSet, SubscriptionId};
use log::{debug, info};

/// Result of a transition attempt.
///
/// Informational only; none of these variants is an error. Unknown ids are
/// tolerated because drag payloads can legitimately go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The record moved partitions and subscribers were notified once.
    Applied,
    /// The record was already in the requested status; nothing happened.
    AlreadyInStatus,
    /// No record with that id exists; nothing happened.
    UnknownId,
}

/// Single source of truth for project records.
///
/// Explicitly constructed and passed to whoever needs it; there is no
/// hidden global instance. All operations run to completion synchronously.
#[derive(Default)]
pub struct BoardStore {
    projects: Vec<Project>,
    subscribers: SubscriberSet,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a validated draft and appends a new `Active` record.
    ///
    /// The store trusts that the draft passed `ProjectDraft::validate`
    /// upstream; no shape checks are repeated here. Every subscriber is
    /// notified once with the updated snapshot.
    pub fn create(&mut self, draft: ProjectDraft) -> ProjectId {
        let people = draft.people;
        let project = Project::new(draft.title, draft.description, people);
        let id = project.id;
        self.projects.push(project);
        // Why: titles and descriptions are user text; keep the log stream
        // metadata-only.
        info!("event=project_created module=store status=ok id={id} people={people}");
        self.notify();
        id
    }

    /// Moves one record to another partition.
    ///
    /// Unknown ids and same-status requests are tolerated without
    /// notification; a real move notifies every subscriber exactly once.
    pub fn transition(&mut self, id: ProjectId, new_status: ProjectStatus) -> TransitionOutcome {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!(
                "event=project_transition_skipped module=store status=noop reason=unknown_id id={id}"
            );
            return TransitionOutcome::UnknownId;
        };

        if project.status == new_status {
            debug!(
                "event=project_transition_skipped module=store status=noop reason=same_status id={id} status={new_status}"
            );
            return TransitionOutcome::AlreadyInStatus;
        }

        let from = project.status;
        project.status = new_status;
        info!(
            "event=project_transitioned module=store status=ok id={id} from={from} to={new_status}"
        );
        self.notify();
        TransitionOutcome::Applied
    }

    /// Registers a snapshot listener; returns its handle.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = self.subscribers.subscribe(listener);
        debug!("event=subscriber_added module=store status=ok subscription_id={id}");
        id
    }

    /// Removes a listener. Returns whether the handle was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.unsubscribe(id);
        debug!(
            "event=subscriber_removed module=store status={} subscription_id={id}",
            if removed { "ok" } else { "noop" }
        );
        removed
    }

    /// Returns a point-in-time copy of all records, in insertion order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Returns copies of the records in one partition, in insertion order.
    ///
    /// Pure read; partitions are derived by filtering, never stored.
    pub fn partition(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|project| project.is_in(status))
            .cloned()
            .collect()
    }

    /// Returns one record by id.
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        self.subscribers.notify(&self.projects);
    }
}
