//! Traversal state.

use rc_core::RoomId;

/// Where the player is and where they have been.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: RoomId,
    history: Vec<String>,
}

impl NavigationState {
    /// Start a traversal in room `start` with no steps taken.
    pub fn new(start: RoomId) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    /// The room the player is in.
    pub fn current(&self) -> RoomId {
        self.current
    }

    /// Names of rooms entered so far, in visit order. The start room is
    /// not included.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Number of steps taken.
    pub fn step_count(&self) -> usize {
        self.history.len()
    }

    /// Move into room `to`, recording its name.
    pub fn advance(&mut self, to: RoomId, name: impl Into<String>) {
        self.current = to;
        self.history.push(name.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_steps() {
        let state = NavigationState::new(RoomId(4));
        assert_eq!(state.current(), RoomId(4));
        assert_eq!(state.step_count(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn advance_records_each_step() {
        let mut state = NavigationState::new(RoomId(0));
        state.advance(RoomId(2), "Kitchen");
        state.advance(RoomId(0), "Dining Room");
        state.advance(RoomId(2), "Kitchen");

        assert_eq!(state.current(), RoomId(2));
        assert_eq!(state.step_count(), 3);
        assert_eq!(state.history(), ["Kitchen", "Dining Room", "Kitchen"]);
    }
}
