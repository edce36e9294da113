//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `projectboard_core` linkage.
//! - Walk the end-to-end flow once: create, render, drag, re-render.

use projectboard_core::view::project_list::ProjectListView;
use projectboard_core::{
    BoardStore, DragSession, DropZone, ProjectDraft, ProjectStatus, ViewComponent,
};

fn main() {
    println!("projectboard_core version={}", projectboard_core::core_version());

    let mut store = BoardStore::new();
    let mut active_list = ProjectListView::new(ProjectStatus::Active);
    let mut finished_list = ProjectListView::new(ProjectStatus::Finished);
    active_list.configure(&mut store);
    finished_list.configure(&mut store);

    let draft = ProjectDraft::new("Website relaunch", "new marketing site with CMS", 3);
    draft.validate().expect("demo draft should be well-formed");
    let id = store.create(draft);

    print!("{}", active_list.rendered());
    print!("{}", finished_list.rendered());

    let mut session = DragSession::new();
    let mut finished_zone = DropZone::new(ProjectStatus::Finished);
    session.begin(id).expect("no drag should be in progress");
    let outcome = session
        .drop_on(&mut finished_zone, &mut store)
        .expect("drag should be in progress");
    println!("drop outcome: {outcome:?}");

    print!("{}", active_list.rendered());
    print!("{}", finished_list.rendered());
}
