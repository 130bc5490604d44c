//! One JSON file per room.
//!
//! A room directory holds `room_<id>.json` files, each carrying the room's
//! id, name, kind tag, and the names of the rooms it connects to. Reading a
//! directory back rebuilds the graph and re-checks every invariant.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::graph::Graph;
use crate::room::{Room, RoomId, RoomKind};

/// The on-disk form of a single room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Room id.
    pub id: usize,
    /// Room name.
    pub name: String,
    /// Start, end, or mid tag.
    pub kind: RoomKind,
    /// Names of connected rooms, in id order.
    pub connections: Vec<String>,
}

impl RoomRecord {
    /// Describe `room` of `graph` as a record.
    pub fn from_room(graph: &Graph, room: &Room) -> Self {
        Self {
            id: room.id.index(),
            name: room.name.clone(),
            kind: room.kind,
            connections: graph
                .neighbor_names(room.id)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// `<prefix>.rooms.<pid>` in the working directory.
pub fn default_dir(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}.rooms.{}", std::process::id()))
}

/// File name used for the room with the given id.
pub fn file_name(id: RoomId) -> String {
    format!("room_{}.json", id.index())
}

/// Write every room of `graph` into `dir`, creating it if needed.
pub fn write_rooms(graph: &Graph, dir: &Path) -> CoreResult<()> {
    fs::create_dir_all(dir).map_err(|source| CoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for room in graph.rooms() {
        let path = dir.join(file_name(room.id));
        let record = RoomRecord::from_room(graph, room);
        let json = serde_json::to_string_pretty(&record).map_err(|source| CoreError::Format {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json + "\n").map_err(|source| CoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "wrote room file");
    }

    info!(dir = %dir.display(), rooms = graph.rooms().len(), "saved rooms");
    Ok(())
}

/// Read every `room_*.json` file in `dir` and rebuild the graph.
pub fn read_rooms(dir: &Path) -> CoreResult<Graph> {
    let io_err = |source| CoreError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_err)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_room_file(p))
        .collect();
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|source| CoreError::Io {
            path: path.clone(),
            source,
        })?;
        let record: RoomRecord = serde_json::from_str(&text)
            .map_err(|source| CoreError::Format { path, source })?;
        records.push(record);
    }
    records.sort_by_key(|r| r.id);

    let graph = graph_from_records(&records)?;
    info!(dir = %dir.display(), "loaded rooms");
    Ok(graph)
}

/// Whether `dir` already holds any `room_*.json` file.
pub fn has_room_files(dir: &Path) -> bool {
    fs::read_dir(dir).is_ok_and(|entries| {
        entries
            .filter_map(|e| e.ok())
            .any(|e| is_room_file(&e.path()))
    })
}

/// Delete the `room_*.json` files in `dir`, leaving every other file alone.
///
/// With `remove_dir` set the directory is removed too, which fails if
/// anything else is still in it.
pub fn remove_rooms(dir: &Path, remove_dir: bool) -> CoreResult<()> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| CoreError::Io { path, source }
    };

    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let path = entry.map_err(io_err(dir))?.path();
        if is_room_file(&path) {
            fs::remove_file(&path).map_err(io_err(&path))?;
        }
    }

    if remove_dir {
        fs::remove_dir(dir).map_err(io_err(dir))?;
    }
    debug!(dir = %dir.display(), "removed room files");
    Ok(())
}

/// Rebuild a graph from records sorted by id.
pub fn graph_from_records(records: &[RoomRecord]) -> CoreResult<Graph> {
    let mut by_name = HashMap::new();
    for record in records {
        if by_name.insert(record.name.as_str(), RoomId(record.id)).is_some() {
            return Err(CoreError::InvalidGraph(format!(
                "duplicate room name \"{}\"",
                record.name
            )));
        }
    }

    let mut rooms = Vec::with_capacity(records.len());
    for record in records {
        let mut neighbors = BTreeSet::new();
        for name in &record.connections {
            let id = by_name
                .get(name.as_str())
                .ok_or_else(|| CoreError::UnknownRoom(name.clone()))?;
            neighbors.insert(*id);
        }
        rooms.push(Room {
            id: RoomId(record.id),
            name: record.name.clone(),
            kind: record.kind,
            neighbors,
        });
    }

    Graph::from_rooms(rooms)
}

fn is_room_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("room_") && n.ends_with(".json"))
}
