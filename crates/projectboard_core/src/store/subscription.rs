//! Subscriber registry and notification fan-out.
//!
//! # Responsibility
//! - Map subscription handles to listener callbacks.
//! - Invoke listeners synchronously, in registration order, with isolation.
//!
//! # Invariants
//! - Handles are issued monotonically and never reused within one registry.
//! - A panicking listener never prevents later listeners from running.

use crate::model::project::Project;
use log::error;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Callback invoked with a defensive snapshot of all records.
///
/// Listeners own their snapshot; mutating it has no effect on store state.
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// Handle identifying one registered listener.
///
/// Returned by `subscribe` and accepted by `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Ordered set of listeners keyed by their subscription handle.
///
/// Registration order equals handle order, so iterating the map visits
/// listeners in the order they subscribed.
#[derive(Default)]
pub struct SubscriberSet {
    listeners: BTreeMap<SubscriptionId, Listener>,
    next_id: u64,
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener and returns its handle.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    /// Removes one listener. Returns whether the handle was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers one snapshot copy to every listener, in registration order.
    ///
    /// Each invocation is isolated: a listener that panics is logged and
    /// skipped while the remaining listeners still receive their copy.
    pub fn notify(&mut self, snapshot: &[Project]) {
        for (id, listener) in self.listeners.iter_mut() {
            let delivery = catch_unwind(AssertUnwindSafe(|| listener(snapshot.to_vec())));
            if delivery.is_err() {
                error!(
                    "event=subscriber_panic module=store status=error subscription_id={id}"
                );
            }
        }
    }
}
