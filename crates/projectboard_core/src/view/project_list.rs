//! Headless list view for one status partition.
//!
//! # Responsibility
//! - Re-render its partition, in full, on every store notification.
//! - Keep the previous output nowhere; render always replaces wholesale.

use crate::model::project::{Project, ProjectStatus};
use crate::store::board_store::BoardStore;
use crate::store::subscription::SubscriptionId;
use crate::view::{list_element_id, ViewComponent};
use std::cell::RefCell;
use std::rc::Rc;

/// Renders one partition into a shared text buffer.
///
/// The buffer is shared via `Rc` so the subscription closure and the view
/// handle observe the same output; single-threaded by design.
pub struct ProjectListView {
    status: ProjectStatus,
    output: Rc<RefCell<String>>,
    subscription: Option<SubscriptionId>,
}

impl ProjectListView {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            output: Rc::new(RefCell::new(render_partition(status, &[]))),
            subscription: None,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Detaches the view's subscription from the store.
    pub fn detach(&mut self, store: &mut BoardStore) {
        if let Some(id) = self.subscription.take() {
            store.unsubscribe(id);
        }
    }
}

impl ViewComponent for ProjectListView {
    fn configure(&mut self, store: &mut BoardStore) {
        let status = self.status;
        let output = Rc::clone(&self.output);
        let id = store.subscribe(Box::new(move |snapshot| {
            *output.borrow_mut() = render_partition(status, &snapshot);
        }));
        self.subscription = Some(id);
        // Initial paint from the current snapshot; later paints arrive via
        // the subscription.
        *self.output.borrow_mut() = render_partition(self.status, &store.snapshot());
    }

    fn rendered(&self) -> String {
        self.output.borrow().clone()
    }
}

/// Builds the full text rendering of one partition.
///
/// Total and idempotent: the same snapshot always yields the same output,
/// and the output never depends on what was rendered before.
fn render_partition(status: ProjectStatus, snapshot: &[Project]) -> String {
    let mut out = format!("[{}] {} PROJECTS\n", list_element_id(status), status);
    for project in snapshot.iter().filter(|project| project.is_in(status)) {
        out.push_str(&format!(
            "- {} ({})\n",
            project.title,
            people_label(project.people)
        ));
    }
    out
}

fn people_label(people: u32) -> String {
    if people == 1 {
        "1 person assigned".to_string()
    } else {
        format!("{people} persons assigned")
    }
}

#[cfg(test)]
mod tests {
    use super::{people_label, render_partition};
    use crate::model::project::{Project, ProjectStatus};

    #[test]
    fn people_label_handles_singular() {
        assert_eq!(people_label(1), "1 person assigned");
        assert_eq!(people_label(4), "4 persons assigned");
    }

    #[test]
    fn render_filters_to_the_view_partition() {
        let mut finished = Project::new("B", "valid description", 2);
        finished.status = ProjectStatus::Finished;
        let snapshot = vec![Project::new("A", "valid description", 1), finished];

        let active = render_partition(ProjectStatus::Active, &snapshot);
        assert!(active.contains("- A (1 person assigned)"));
        assert!(!active.contains("- B"));

        let done = render_partition(ProjectStatus::Finished, &snapshot);
        assert!(done.contains("- B (2 persons assigned)"));
        assert!(!done.contains("- A"));
    }

    #[test]
    fn render_is_idempotent_for_the_same_snapshot() {
        let snapshot = vec![Project::new("A", "valid description", 1)];
        let first = render_partition(ProjectStatus::Active, &snapshot);
        let second = render_partition(ProjectStatus::Active, &snapshot);
        assert_eq!(first, second);
    }
}
