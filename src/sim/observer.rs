//! Non-owning link from AI inputs to the ball they chase
//!
//! The arena re-points the observer whenever it serves a new ball. Clones
//! share the same target, so every AI input sees the change.

use std::cell::Cell;
use std::rc::Rc;

use super::entity::EntityId;

#[derive(Debug, Clone, Default)]
pub struct Observer {
    target: Rc<Cell<Option<EntityId>>>,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `id`, replacing any previous target
    pub fn attach(&self, id: EntityId) {
        self.target.set(Some(id));
    }

    pub fn detach(&self) {
        self.target.set(None);
    }

    /// The tracked entity, or `None` if never attached
    pub fn current_target(&self) -> Option<EntityId> {
        self.target.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unattached_has_no_target() {
        assert_eq!(Observer::new().current_target(), None);
    }

    #[test]
    fn test_attach_replaces_target() {
        let observer = Observer::new();
        observer.attach(EntityId(3));
        observer.attach(EntityId(7));
        assert_eq!(observer.current_target(), Some(EntityId(7)));
        observer.detach();
        assert_eq!(observer.current_target(), None);
    }

    #[test]
    fn test_clones_share_target() {
        let observer = Observer::new();
        let reader = observer.clone();
        observer.attach(EntityId(9));
        assert_eq!(reader.current_target(), Some(EntityId(9)));
    }
}
