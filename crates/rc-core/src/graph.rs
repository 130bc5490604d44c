use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::error::{CoreError, CoreResult};
use crate::room::{Room, RoomId, RoomKind};
use crate::{MIN_DEGREE, ROOM_COUNT};

/// The complete set of rooms and their symmetric connections.
///
/// A graph can only be obtained through [`Graph::from_rooms`], which checks
/// every invariant, so holders of a `Graph` may rely on them:
///
/// - exactly [`ROOM_COUNT`] rooms, each room's id equal to its position;
/// - pairwise distinct names;
/// - exactly one start room and one end room, and they differ;
/// - no room connects to itself and every connection is listed on both sides;
/// - every room has at least [`MIN_DEGREE`] neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    rooms: Vec<Room>,
    start: RoomId,
    end: RoomId,
}

impl Graph {
    /// Assemble a graph from fully wired rooms, rejecting any invariant
    /// violation with [`CoreError::InvalidGraph`].
    pub fn from_rooms(rooms: Vec<Room>) -> CoreResult<Self> {
        let (start, end) = check_rooms(&rooms)?;
        Ok(Self { rooms, start, end })
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by id.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// The start room's id.
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// The end room's id.
    pub fn end(&self) -> RoomId {
        self.end
    }

    /// Find a room by exact, case-sensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Names of a room's neighbors in ascending id order.
    pub fn neighbor_names(&self, id: RoomId) -> Vec<&str> {
        self.room(id)
            .map(|room| {
                room.neighbors
                    .iter()
                    .filter_map(|n| self.room(*n))
                    .map(|n| n.name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether `a` and `b` share an edge.
    pub fn are_connected(&self, a: RoomId, b: RoomId) -> bool {
        self.room(a).is_some_and(|r| r.is_connected_to(b))
    }

    /// Every room reachable from `from`, including `from` itself.
    pub fn reachable_from(&self, from: RoomId) -> BTreeSet<RoomId> {
        reachable(&self.rooms, from)
    }

    /// Whether every room can be reached from the start room.
    pub fn is_connected(&self) -> bool {
        self.reachable_from(self.start).len() == self.rooms.len()
    }

    /// Re-run every invariant check. Always succeeds for a graph obtained
    /// through [`Graph::from_rooms`]; kept for tests and diagnostics.
    pub fn validate(&self) -> CoreResult<()> {
        check_rooms(&self.rooms).map(|_| ())
    }
}

/// Breadth-first search over the neighbor sets of `rooms`.
pub(crate) fn reachable(rooms: &[Room], from: RoomId) -> BTreeSet<RoomId> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::new();

    if from.index() >= rooms.len() {
        return seen;
    }
    seen.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for next in &rooms[current.index()].neighbors {
            if next.index() < rooms.len() && seen.insert(*next) {
                queue.push_back(*next);
            }
        }
    }

    seen
}

fn check_rooms(rooms: &[Room]) -> CoreResult<(RoomId, RoomId)> {
    let invalid = |msg: String| Err(CoreError::InvalidGraph(msg));

    if rooms.len() != ROOM_COUNT {
        return invalid(format!(
            "expected {ROOM_COUNT} rooms, found {}",
            rooms.len()
        ));
    }

    let mut names = HashSet::new();
    let mut start = None;
    let mut end = None;

    for (index, room) in rooms.iter().enumerate() {
        if room.id.index() != index {
            return invalid(format!(
                "room \"{}\" has id {} at position {index}",
                room.name, room.id
            ));
        }
        if !names.insert(room.name.as_str()) {
            return invalid(format!("duplicate room name \"{}\"", room.name));
        }

        let repeated = match room.kind {
            RoomKind::Start => start.replace(room.id).is_some(),
            RoomKind::End => end.replace(room.id).is_some(),
            RoomKind::Mid => false,
        };
        if repeated {
            return invalid(format!("more than one {} room", room.kind));
        }

        if room.neighbors.contains(&room.id) {
            return invalid(format!("room \"{}\" connects to itself", room.name));
        }
        for neighbor in &room.neighbors {
            let Some(other) = rooms.get(neighbor.index()) else {
                return invalid(format!(
                    "room \"{}\" connects to missing room {neighbor}",
                    room.name
                ));
            };
            if !other.neighbors.contains(&room.id) {
                return invalid(format!(
                    "connection \"{}\" -> \"{}\" is not mirrored",
                    room.name, other.name
                ));
            }
        }
        if room.degree() < MIN_DEGREE {
            return invalid(format!(
                "room \"{}\" has {} connections, at least {MIN_DEGREE} required",
                room.name,
                room.degree()
            ));
        }
    }

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        (None, _) => invalid(format!("no {} room", RoomKind::Start)),
        (_, None) => invalid(format!("no {} room", RoomKind::End)),
    }
}
