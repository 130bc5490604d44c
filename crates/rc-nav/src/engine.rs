//! The navigation state machine.

use rc_core::{Graph, Room, RoomId};
use tracing::{debug, info};

use crate::error::{NavError, NavResult};
use crate::state::NavigationState;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Waiting for the player's next room.
    AwaitingInput,
    /// The end room has been reached. Terminal.
    Won,
}

/// What the player sees in the current room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView<'g> {
    /// The current room's name.
    pub name: &'g str,
    /// Neighboring room names in ascending id order.
    pub neighbors: Vec<&'g str>,
}

/// The outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Steps taken from the start room to the end room.
    pub step_count: usize,
    /// Rooms entered, in order, ending with the end room.
    pub path: Vec<String>,
}

/// Walks one player from the start room to the end room of a graph.
///
/// The graph is only borrowed; all mutable state lives in the engine's
/// [`NavigationState`].
#[derive(Debug, Clone)]
pub struct NavigationEngine<'g> {
    graph: &'g Graph,
    state: NavigationState,
}

impl<'g> NavigationEngine<'g> {
    /// Begin a session in the graph's start room.
    pub fn new(graph: &'g Graph) -> Self {
        debug!(start = %graph.start(), "navigation session started");
        Self {
            graph,
            state: NavigationState::new(graph.start()),
        }
    }

    /// The graph being walked.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The traversal state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Whether the end room has been reached.
    pub fn status(&self) -> SessionStatus {
        if self.state.current() == self.graph.end() {
            SessionStatus::Won
        } else {
            SessionStatus::AwaitingInput
        }
    }

    /// The current room and its neighbors. Has no side effects.
    pub fn describe_current_room(&self) -> RoomView<'g> {
        let room = self.current_room();
        RoomView {
            name: room.name.as_str(),
            neighbors: self.graph.neighbor_names(room.id),
        }
    }

    /// Try to move to the neighbor named exactly `room_name`.
    ///
    /// On [`NavError::UnrecognizedRoom`] nothing changes and the caller may
    /// simply ask again.
    pub fn submit_choice(&mut self, room_name: &str) -> NavResult<SessionStatus> {
        if self.status() == SessionStatus::Won {
            return Err(NavError::SessionOver);
        }

        let rooms = self.graph.rooms();
        let Some(next) = self
            .current_room()
            .neighbors
            .iter()
            .map(|id| &rooms[id.index()])
            .find(|r| r.name == room_name)
        else {
            debug!(choice = room_name, "unrecognized room");
            return Err(NavError::UnrecognizedRoom(room_name.to_string()));
        };

        self.state.advance(next.id, next.name.as_str());
        debug!(room = %next.name, steps = self.state.step_count(), "moved");

        let status = self.status();
        if status == SessionStatus::Won {
            info!(steps = self.state.step_count(), "reached the end room");
        }
        Ok(status)
    }

    /// The step count and path of a won session.
    pub fn finalize(&self) -> NavResult<Summary> {
        if self.status() != SessionStatus::Won {
            return Err(NavError::NotFinished);
        }
        Ok(Summary {
            step_count: self.state.step_count(),
            path: self.state.history().to_vec(),
        })
    }

    fn current_room(&self) -> &'g Room {
        self.room(self.state.current())
    }

    fn room(&self, id: RoomId) -> &'g Room {
        // Ids held by the state always come from this graph.
        &self.graph.rooms()[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rc_core::fixture::sample_graph as test_graph;
    use rc_core::{NamePool, build_graph};

    #[test]
    fn starts_in_start_room() {
        let graph = test_graph();
        let engine = NavigationEngine::new(&graph);

        assert_eq!(engine.state().current(), RoomId(0));
        assert_eq!(engine.status(), SessionStatus::AwaitingInput);
        assert_eq!(engine.state().step_count(), 0);
    }

    #[test]
    fn describe_is_idempotent() {
        let graph = test_graph();
        let engine = NavigationEngine::new(&graph);

        let first = engine.describe_current_room();
        assert_eq!(first.name, "A");
        assert_eq!(first.neighbors, vec!["B", "C", "D"]);
        assert_eq!(engine.describe_current_room(), first);
        assert_eq!(engine.describe_current_room(), first);
    }

    #[test]
    fn unknown_choice_leaves_state_untouched() {
        let graph = test_graph();
        let mut engine = NavigationEngine::new(&graph);
        let before = engine.state().clone();

        for bad in ["Z", "b", " B", "B ", "G", ""] {
            let err = engine.submit_choice(bad).unwrap_err();
            assert!(matches!(err, NavError::UnrecognizedRoom(ref n) if n == bad));
            assert_eq!(engine.state(), &before);
        }
    }

    #[test]
    fn valid_choice_moves_one_step() {
        let graph = test_graph();
        let mut engine = NavigationEngine::new(&graph);

        let status = engine.submit_choice("B").unwrap();
        assert_eq!(status, SessionStatus::AwaitingInput);
        assert_eq!(engine.state().current(), RoomId(1));
        assert_eq!(engine.state().history(), ["B"]);
        assert_eq!(engine.state().step_count(), 1);
        assert_eq!(engine.describe_current_room().neighbors, vec!["A", "C", "E"]);
    }

    #[test]
    fn walk_from_start_to_end() {
        let graph = test_graph();
        let mut engine = NavigationEngine::new(&graph);

        assert!(matches!(
            engine.submit_choice("Z"),
            Err(NavError::UnrecognizedRoom(_))
        ));
        assert_eq!(engine.submit_choice("B").unwrap(), SessionStatus::AwaitingInput);
        assert!(matches!(engine.finalize(), Err(NavError::NotFinished)));
        assert_eq!(engine.submit_choice("E").unwrap(), SessionStatus::AwaitingInput);
        assert_eq!(engine.submit_choice("G").unwrap(), SessionStatus::Won);

        let summary = engine.finalize().unwrap();
        assert_eq!(summary.step_count, 3);
        assert_eq!(summary.path, ["B", "E", "G"]);
        assert_eq!(summary.path.last().map(String::as_str), Some("G"));
    }

    #[test]
    fn revisits_are_counted() {
        let graph = test_graph();
        let mut engine = NavigationEngine::new(&graph);

        for step in ["B", "A", "B", "C", "F", "G"] {
            engine.submit_choice(step).unwrap();
        }
        let summary = engine.finalize().unwrap();
        assert_eq!(summary.step_count, 6);
        assert_eq!(summary.path, ["B", "A", "B", "C", "F", "G"]);
    }

    #[test]
    fn no_moves_after_winning() {
        let graph = test_graph();
        let mut engine = NavigationEngine::new(&graph);
        engine.submit_choice("D").unwrap();
        engine.submit_choice("G").unwrap();

        assert!(matches!(engine.submit_choice("D"), Err(NavError::SessionOver)));
        assert_eq!(engine.finalize().unwrap().step_count, 2);
    }

    #[test]
    fn random_walks_on_built_graphs_terminate() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = build_graph(&NamePool::default(), &mut rng).unwrap();
            let mut engine = NavigationEngine::new(&graph);

            let mut steps = 0;
            while engine.status() == SessionStatus::AwaitingInput {
                let view = engine.describe_current_room();
                let pick = view.neighbors[rng.random_range(0..view.neighbors.len())];
                engine.submit_choice(pick).unwrap();
                steps += 1;
                assert!(steps < 100_000, "walk did not reach the end room");
            }

            let summary = engine.finalize().unwrap();
            assert_eq!(summary.step_count, summary.path.len());
            let end = graph.room(graph.end()).unwrap();
            assert_eq!(summary.path.last(), Some(&end.name));
        }
    }
}
