use std::cell::{Ref, RefCell};
use std::rc::Rc;

use super::project::{Project, ProjectStatus};
use super::store::{ListenerToken, ProjectStore};

/// Projects whose status matches `status`, in source order.
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| p.status == status)
        .cloned()
        .collect()
}

/// Per-column projection of the store.
///
/// Holds a cached, read-only subset of the last snapshot, refiltered on
/// every store broadcast. The cache is shared between the view and the
/// store listener through an `Rc`, so the subscription closure built at
/// attach time keeps writing into the cell the renderer reads from.
pub struct ColumnView {
    status: ProjectStatus,
    cache: Rc<RefCell<Vec<Project>>>,
    token: ListenerToken,
}

impl ColumnView {
    /// Build a column for `status` and subscribe it to the store.
    pub fn attach(store: &mut ProjectStore, status: ProjectStatus) -> Self {
        let cache = Rc::new(RefCell::new(filter_by_status(store.projects(), status)));
        let sink = Rc::clone(&cache);
        let token = store.subscribe(move |snapshot| {
            *sink.borrow_mut() = filter_by_status(snapshot, status);
        });
        Self {
            status,
            cache,
            token,
        }
    }

    /// Unsubscribe from the store. The cache keeps its last contents.
    pub fn detach(&self, store: &mut ProjectStore) {
        store.unsubscribe(self.token);
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// The cached subset for this column.
    pub fn projects(&self) -> Ref<'_, Vec<Project>> {
        self.cache.borrow()
    }

    pub fn count(&self) -> usize {
        self.cache.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn mixed_store() -> (ProjectStore, Uuid, Uuid, Uuid) {
        let mut store = ProjectStore::new();
        let a = store.add_project("A", "first", 1);
        let b = store.add_project("B", "second", 2);
        let c = store.add_project("C", "third", 3);
        store.move_project(b, ProjectStatus::Finished);
        (store, a, b, c)
    }

    #[test]
    fn filter_partitions_the_snapshot() {
        let (store, ..) = mixed_store();
        let active = filter_by_status(store.projects(), ProjectStatus::Active);
        let finished = filter_by_status(store.projects(), ProjectStatus::Finished);

        assert_eq!(active.len() + finished.len(), store.len());
        for p in &active {
            assert!(!finished.iter().any(|q| q.id == p.id));
        }
    }

    #[test]
    fn filter_preserves_source_order() {
        let (store, a, _, c) = mixed_store();
        let active = filter_by_status(store.projects(), ProjectStatus::Active);
        let ids: Vec<Uuid> = active.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn columns_refilter_on_every_broadcast() {
        let mut store = ProjectStore::new();
        let active = ColumnView::attach(&mut store, ProjectStatus::Active);
        let finished = ColumnView::attach(&mut store, ProjectStatus::Finished);

        let id = store.add_project("Build API", "Create REST endpoints", 3);
        assert_eq!(active.count(), 1);
        assert_eq!(finished.count(), 0);

        store.move_project(id, ProjectStatus::Finished);
        assert_eq!(active.count(), 0);
        assert_eq!(finished.count(), 1);
        assert_eq!(finished.projects()[0].id, id);

        // Dropping onto the current column changes neither side.
        store.move_project(id, ProjectStatus::Finished);
        assert_eq!(active.count(), 0);
        assert_eq!(finished.count(), 1);
    }

    #[test]
    fn attach_picks_up_preexisting_projects() {
        let (mut store, _, b, _) = mixed_store();
        let finished = ColumnView::attach(&mut store, ProjectStatus::Finished);
        assert_eq!(finished.count(), 1);
        assert_eq!(finished.projects()[0].id, b);
    }

    #[test]
    fn detached_column_stops_refiltering() {
        let mut store = ProjectStore::new();
        let active = ColumnView::attach(&mut store, ProjectStatus::Active);
        store.add_project("A", "first", 1);

        active.detach(&mut store);
        store.add_project("B", "second", 2);

        // The cache keeps its last contents from before the detach.
        assert_eq!(active.count(), 1);
    }
}
