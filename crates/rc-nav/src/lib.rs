//! Navigation engine for roomcrawl.
//!
//! A [`NavigationEngine`] walks a player through an immutable room graph from
//! the start room to the end room, one named step at a time, and keeps the
//! path taken. [`run_session`] drives an engine over line-oriented input and
//! output streams.

/// The navigation state machine.
pub mod engine;
/// Error types for navigation.
pub mod error;
/// Traversal state owned by the engine.
pub mod state;
/// Line-oriented play loop.
pub mod transcript;

pub use engine::{NavigationEngine, RoomView, SessionStatus, Summary};
pub use error::{NavError, NavResult};
pub use state::NavigationState;
pub use transcript::run_session;
