//! A fixed seven-room graph shared by tests across the workspace.
//!
//! ```text
//! A: B C D      E: B D F G
//! B: A C E      F: C D E G
//! C: A B F      G: D E F
//! D: A E F G
//! ```
//!
//! A is the start room and G the end room.

use crate::graph::Graph;
use crate::room::{Room, RoomId, RoomKind};

const NAMES: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 2),
    (1, 4),
    (2, 5),
    (3, 4),
    (3, 5),
    (3, 6),
    (4, 5),
    (4, 6),
    (5, 6),
];

/// The sample rooms, wired and tagged but not yet checked.
pub fn sample_rooms() -> Vec<Room> {
    let mut rooms: Vec<Room> = NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Room::new(RoomId(i), *name))
        .collect();
    for (a, b) in EDGES {
        rooms[a].neighbors.insert(RoomId(b));
        rooms[b].neighbors.insert(RoomId(a));
    }
    rooms[0].kind = RoomKind::Start;
    rooms[6].kind = RoomKind::End;
    rooms
}

/// The sample rooms as a graph.
pub fn sample_graph() -> Graph {
    Graph::from_rooms(sample_rooms()).expect("sample rooms form a valid graph")
}
