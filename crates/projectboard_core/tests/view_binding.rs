use projectboard_core::view::project_list::ProjectListView;
use projectboard_core::{
    list_element_id, BoardStore, DragSession, DropZone, ProjectDraft, ProjectStatus, ViewComponent,
};

#[test]
fn configured_views_repaint_on_every_real_change() {
    let mut store = BoardStore::new();
    let mut active_list = ProjectListView::new(ProjectStatus::Active);
    let mut finished_list = ProjectListView::new(ProjectStatus::Finished);
    active_list.configure(&mut store);
    finished_list.configure(&mut store);

    let id = store.create(ProjectDraft::new("Relaunch", "new marketing site", 3));
    assert!(active_list.rendered().contains("- Relaunch"));
    assert!(!finished_list.rendered().contains("- Relaunch"));

    store.transition(id, ProjectStatus::Finished);
    assert!(!active_list.rendered().contains("- Relaunch"));
    assert!(finished_list.rendered().contains("- Relaunch"));
}

#[test]
fn views_render_their_element_id_header() {
    let mut store = BoardStore::new();
    let mut view = ProjectListView::new(ProjectStatus::Active);
    view.configure(&mut store);

    assert!(view
        .rendered()
        .starts_with(&format!("[{}]", list_element_id(ProjectStatus::Active))));
}

#[test]
fn configure_paints_preexisting_records() {
    let mut store = BoardStore::new();
    store.create(ProjectDraft::new("Early", "created before the view", 1));

    let mut view = ProjectListView::new(ProjectStatus::Active);
    view.configure(&mut store);

    assert!(view.rendered().contains("- Early (1 person assigned)"));
}

#[test]
fn detached_view_keeps_its_last_rendering() {
    let mut store = BoardStore::new();
    let mut view = ProjectListView::new(ProjectStatus::Active);
    view.configure(&mut store);

    store.create(ProjectDraft::new("First", "valid description", 2));
    let painted = view.rendered();

    view.detach(&mut store);
    store.create(ProjectDraft::new("Second", "valid description", 2));

    assert_eq!(view.rendered(), painted);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn drag_driven_transition_repaints_both_partitions() {
    let mut store = BoardStore::new();
    let mut active_list = ProjectListView::new(ProjectStatus::Active);
    let mut finished_list = ProjectListView::new(ProjectStatus::Finished);
    active_list.configure(&mut store);
    finished_list.configure(&mut store);

    let id = store.create(ProjectDraft::new("Relaunch", "new marketing site", 3));

    let mut session = DragSession::new();
    let mut zone = DropZone::new(ProjectStatus::Finished);
    session.begin(id).unwrap();
    session.drop_on(&mut zone, &mut store).unwrap();

    assert!(!active_list.rendered().contains("- Relaunch"));
    assert!(finished_list.rendered().contains("- Relaunch"));
}
