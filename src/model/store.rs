use uuid::Uuid;

use super::project::{Project, ProjectStatus};

/// Handle returned by [`ProjectStore::subscribe`]; pass it back to
/// [`ProjectStore::unsubscribe`] to stop receiving broadcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerToken(u64);

type Listener = Box<dyn FnMut(&[Project])>;

/// Single source of truth for all projects on the board.
///
/// Owns the authoritative list, creation, and status transitions, and
/// notifies subscribers with a full snapshot after every mutation. One
/// instance is constructed in `KanbanApp` and passed down explicitly.
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<(ListenerToken, Listener)>,
    next_token: u64,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
            next_token: 0,
        }
    }

    /// Read-only view of the authoritative list.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Append a new `Active` project and broadcast.
    ///
    /// No validation happens here; the form is responsible for checking
    /// its fields before calling. Returns the fresh project id.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Uuid {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.push(project);
        self.broadcast();
        id
    }

    /// Move the project with `id` to `status` and broadcast.
    ///
    /// Unknown ids are a no-op (logged — a drop usually means the drag
    /// payload went stale). Moving a project onto its current status is
    /// also a no-op, with no broadcast: dropping a card on its own
    /// column observably changes nothing.
    pub fn move_project(&mut self, id: Uuid, status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            log::warn!("move_project: no project with id {id}, ignoring stale drag payload");
            return;
        };
        if project.status == status {
            return;
        }
        project.status = status;
        self.broadcast();
    }

    /// Register a listener invoked with a full-list snapshot after every
    /// mutation, in subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Project]) + 'static) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.listeners.push((token, Box::new(listener)));
        log::debug!("subscribed listener {token:?}");
        token
    }

    /// Remove a previously registered listener. Returns whether the
    /// token was still registered.
    pub fn unsubscribe(&mut self, token: ListenerToken) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(t, _)| *t != token);
        self.listeners.len() != before
    }

    fn broadcast(&mut self) {
        // Every listener gets the same immutable copy, never the live list.
        let snapshot = self.projects.clone();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn seeded_store() -> (ProjectStore, Uuid) {
        let mut store = ProjectStore::new();
        let id = store.add_project("Build API", "Create REST endpoints", 3);
        (store, id)
    }

    #[test]
    fn add_project_appends_one_active_project() {
        let (store, id) = seeded_store();
        assert_eq!(store.len(), 1);
        let p = &store.projects()[0];
        assert_eq!(p.id, id);
        assert_eq!(p.title, "Build API");
        assert_eq!(p.description, "Create REST endpoints");
        assert_eq!(p.people, 3);
        assert_eq!(p.status, ProjectStatus::Active);
    }

    #[test]
    fn ids_are_unique_across_additions() {
        let mut store = ProjectStore::new();
        let a = store.add_project("A", "first", 1);
        let b = store.add_project("B", "second", 2);
        assert_ne!(a, b);
    }

    #[test]
    fn move_project_changes_only_the_target() {
        let mut store = ProjectStore::new();
        let a = store.add_project("A", "first", 1);
        let b = store.add_project("B", "second", 2);

        store.move_project(b, ProjectStatus::Finished);

        let by_id = |id| store.projects().iter().find(|p| p.id == id).unwrap().status;
        assert_eq!(by_id(a), ProjectStatus::Active);
        assert_eq!(by_id(b), ProjectStatus::Finished);
    }

    #[test]
    fn move_to_same_status_is_a_silent_no_op() {
        let (mut store, id) = seeded_store();
        let calls = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&calls);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        let before = store.projects().to_vec();
        store.move_project(id, ProjectStatus::Active);

        assert_eq!(store.projects(), before.as_slice());
        assert_eq!(*calls.borrow(), 0, "no broadcast for a no-op move");
    }

    #[test]
    fn move_with_unknown_id_is_ignored() {
        let (mut store, _) = seeded_store();
        let before = store.projects().to_vec();
        store.move_project(Uuid::new_v4(), ProjectStatus::Finished);
        assert_eq!(store.projects(), before.as_slice());
    }

    #[test]
    fn listeners_fire_in_subscription_order_with_full_snapshots() {
        let mut store = ProjectStore::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&order);
        store.subscribe(move |snap| sink.borrow_mut().push(('a', snap.len())));
        let sink = Rc::clone(&order);
        store.subscribe(move |snap| sink.borrow_mut().push(('b', snap.len())));

        store.add_project("A", "first", 1);
        store.add_project("B", "second", 2);

        assert_eq!(
            *order.borrow(),
            vec![('a', 1), ('b', 1), ('a', 2), ('b', 2)]
        );
    }

    #[test]
    fn unsubscribed_listeners_stop_receiving() {
        let mut store = ProjectStore::new();
        let calls = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&calls);
        let token = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.add_project("A", "first", 1);
        assert!(store.unsubscribe(token));
        assert!(!store.unsubscribe(token), "second removal finds nothing");
        store.add_project("B", "second", 2);

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn snapshots_are_copies_not_the_live_list() {
        let mut store = ProjectStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |snap| *sink.borrow_mut() = snap.to_vec());

        let id = store.add_project("A", "first", 1);
        let held = seen.borrow().clone();
        store.move_project(id, ProjectStatus::Finished);

        // The copy handed out earlier still shows the old status.
        assert_eq!(held[0].status, ProjectStatus::Active);
    }
}
