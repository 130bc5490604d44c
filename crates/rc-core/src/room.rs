use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a room within its graph. Stable for the lifetime of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub usize);

impl RoomId {
    /// The position of this room in the graph's room list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The role a room plays in a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    /// Where the player begins.
    #[serde(rename = "START_ROOM")]
    Start,
    /// Any room that is neither start nor end.
    #[serde(rename = "MID_ROOM")]
    Mid,
    /// Reaching this room wins the game.
    #[serde(rename = "END_ROOM")]
    End,
}

impl RoomKind {
    /// The tag written to room files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START_ROOM",
            Self::Mid => "MID_ROOM",
            Self::End => "END_ROOM",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vertex of the room graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Position in the graph.
    pub id: RoomId,
    /// Unique display name.
    pub name: String,
    /// Start, end, or mid room.
    pub kind: RoomKind,
    /// Rooms reachable in one step, ordered by id.
    pub neighbors: BTreeSet<RoomId>,
}

impl Room {
    /// Create an unconnected mid room.
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: RoomKind::Mid,
            neighbors: BTreeSet::new(),
        }
    }

    /// Number of neighbors.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether `other` is one step away from this room.
    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.neighbors.contains(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_room_is_isolated_mid_room() {
        let room = Room::new(RoomId(3), "Kitchen");
        assert_eq!(room.id, RoomId(3));
        assert_eq!(room.kind, RoomKind::Mid);
        assert_eq!(room.degree(), 0);
        assert!(!room.is_connected_to(RoomId(0)));
    }

    #[test]
    fn kind_tags_round_trip_through_json() {
        let json = serde_json::to_string(&RoomKind::Start).unwrap();
        assert_eq!(json, "\"START_ROOM\"");
        let kind: RoomKind = serde_json::from_str("\"END_ROOM\"").unwrap();
        assert_eq!(kind, RoomKind::End);
        assert_eq!(RoomKind::Mid.to_string(), "MID_ROOM");
    }
}
