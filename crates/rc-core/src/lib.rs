//! Core types for roomcrawl: rooms, the room graph, and how it is built.
//!
//! A [`Graph`] is produced once by the [`GraphBuilder`] from a [`NamePool`]
//! and is never mutated afterwards. The [`rooms`] module mirrors a graph to
//! one JSON file per room and reads such a directory back.

/// Random construction of a room graph.
pub mod builder;
/// Session configuration (seed, room directory, name pool).
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Shared sample graph for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod fixture;
/// The immutable room graph and its queries.
pub mod graph;
/// The pool of candidate room names.
pub mod names;
/// Room identifiers, kinds, and the room vertex type.
pub mod room;
/// Per-room file persistence.
pub mod rooms;

/// Re-export builder types.
pub use builder::{GraphBuilder, build_graph};
/// Re-export configuration.
pub use config::GameConfig;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the graph.
pub use graph::Graph;
/// Re-export the name pool.
pub use names::NamePool;
/// Re-export room types.
pub use room::{Room, RoomId, RoomKind};

/// Number of rooms in every graph.
pub const ROOM_COUNT: usize = 7;

/// Minimum number of neighbors each room has once a graph is built.
pub const MIN_DEGREE: usize = 3;
