//! Session arena.
//!
//! Each interactive viewing instance owns one record in the arena and is
//! addressed by its `SessionId`. Records are never shared between sessions.

use std::fmt;

/// Identifies one session record.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct SessionId(usize);

impl SessionId {
    pub fn from_raw(raw: usize) -> Self {
        SessionId(raw)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns per-session records. Closed slots are not reused so a stale id can
/// never reach another session's record.
///
pub struct Sessions<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for Sessions<T> {
    fn default() -> Self {
        Sessions { slots: vec![] }
    }
}

impl<T> Sessions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new record and return its id.
    ///
    pub fn open(&mut self, record: T) -> SessionId {
        self.slots.push(Some(record));
        SessionId(self.slots.len() - 1)
    }

    pub fn get(&self, id: SessionId) -> Option<&T> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Remove the record, returning it if the session was open.
    ///
    pub fn close(&mut self, id: SessionId) -> Option<T> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    /// Number of open sessions.
    ///
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NavigationState, Page};

    #[test]
    fn open_and_get() {
        let mut sessions = Sessions::new();
        let id = sessions.open(NavigationState::default());
        assert_eq!(sessions.get(id).unwrap().current(), Page::Overview);
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn sessions_are_independent() {
        let mut sessions = Sessions::new();
        let first = sessions.open(NavigationState::default());
        let second = sessions.open(NavigationState::default());
        sessions
            .get_mut(first)
            .unwrap()
            .set(Page::LocalEnvironment)
            .unwrap();
        assert_eq!(sessions.get(first).unwrap().current(), Page::LocalEnvironment);
        assert_eq!(sessions.get(second).unwrap().current(), Page::Overview);
    }

    #[test]
    fn close_removes_record_without_reusing_id() {
        let mut sessions = Sessions::new();
        let first = sessions.open(NavigationState::default());
        assert!(sessions.close(first).is_some());
        assert!(sessions.get(first).is_none());
        assert!(sessions.close(first).is_none());
        let second = sessions.open(NavigationState::default());
        assert_ne!(first, second);
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn unknown_id() {
        let sessions: Sessions<NavigationState> = Sessions::new();
        assert!(sessions.get(SessionId::from_raw(7)).is_none());
        assert!(sessions.is_empty());
    }
}
