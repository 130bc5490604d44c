use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::graph::{Graph, reachable};
use crate::names::NamePool;
use crate::room::{Room, RoomId, RoomKind};
use crate::{MIN_DEGREE, ROOM_COUNT};

// Each room must find MIN_DEGREE distinct partners among the others.
const _: () = assert!(ROOM_COUNT > MIN_DEGREE);

/// Builds random room graphs from a name pool.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    pool: NamePool,
}

impl GraphBuilder {
    /// Create a builder drawing room names from `pool`.
    pub fn new(pool: NamePool) -> Self {
        Self { pool }
    }

    /// The pool rooms are named from.
    pub fn pool(&self) -> &NamePool {
        &self.pool
    }

    /// Build a fresh graph.
    ///
    /// Fails with [`CoreError::InsufficientNames`] when the pool cannot name
    /// every room; otherwise always succeeds.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> CoreResult<Graph> {
        let available = self.pool.distinct_len();
        if available < ROOM_COUNT {
            return Err(CoreError::InsufficientNames {
                available,
                required: ROOM_COUNT,
            });
        }

        let mut pool = self.pool.clone();
        let mut rooms = Vec::with_capacity(ROOM_COUNT);
        for index in 0..ROOM_COUNT {
            let name = pool.draw(rng).ok_or(CoreError::InsufficientNames {
                available,
                required: ROOM_COUNT,
            })?;
            debug!(room = index, name = %name, "named room");
            rooms.push(Room::new(RoomId(index), name));
        }

        let start = RoomId(rng.random_range(0..ROOM_COUNT));
        let mut end = RoomId(rng.random_range(0..ROOM_COUNT));
        while end == start {
            end = RoomId(rng.random_range(0..ROOM_COUNT));
        }

        // Minimum degree over 7 rooms already forces a single component, the
        // check keeps that true if the constants ever change.
        loop {
            wire(&mut rooms, rng);
            if reachable(&rooms, start).len() == rooms.len() {
                break;
            }
            warn!("room graph came out disconnected, rewiring");
            for room in &mut rooms {
                room.neighbors.clear();
            }
        }

        rooms[start.index()].kind = RoomKind::Start;
        rooms[end.index()].kind = RoomKind::End;

        let graph = Graph::from_rooms(rooms)?;
        info!(start = %graph.start(), end = %graph.end(), "built room graph");
        Ok(graph)
    }
}

/// Build a graph from `pool` with the given random source.
pub fn build_graph<R: Rng + ?Sized>(pool: &NamePool, rng: &mut R) -> CoreResult<Graph> {
    GraphBuilder::new(pool.clone()).build(rng)
}

/// Give every room at least [`MIN_DEGREE`] neighbors.
///
/// Rooms are topped up in id order. Connecting `i` to `j` may push `j` past
/// the minimum; that surplus is kept.
fn wire<R: Rng + ?Sized>(rooms: &mut [Room], rng: &mut R) {
    for i in 0..rooms.len() {
        while rooms[i].degree() < MIN_DEGREE {
            let j = rng.random_range(0..rooms.len());
            if j == i || rooms[i].is_connected_to(RoomId(j)) {
                continue;
            }
            connect(rooms, RoomId(i), RoomId(j));
        }
    }
}

/// Add the undirected edge `a`-`b` to both rooms at once.
fn connect(rooms: &mut [Room], a: RoomId, b: RoomId) {
    rooms[a.index()].neighbors.insert(b);
    rooms[b.index()].neighbors.insert(a);
    debug_assert!(
        rooms
            .iter()
            .all(|r| r.neighbors.iter().all(|n| rooms[n.index()].is_connected_to(r.id))),
        "asymmetric edge after connecting {a} and {b}"
    );
    debug!(from = %a, to = %b, "connected rooms");
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn check_invariants(graph: &Graph, pool: &NamePool) {
        assert_eq!(graph.rooms().len(), ROOM_COUNT);
        assert!(graph.validate().is_ok());
        assert!(graph.is_connected());
        assert_ne!(graph.start(), graph.end());

        let starts = graph.rooms().iter().filter(|r| r.kind == RoomKind::Start).count();
        let ends = graph.rooms().iter().filter(|r| r.kind == RoomKind::End).count();
        assert_eq!((starts, ends), (1, 1));

        let names: HashSet<&str> = graph.rooms().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), ROOM_COUNT);
        for room in graph.rooms() {
            assert!(pool.names().contains(&room.name));
            assert!(room.degree() >= MIN_DEGREE);
            assert!(!room.is_connected_to(room.id));
            for n in &room.neighbors {
                assert!(graph.are_connected(*n, room.id));
            }
        }
    }

    #[test]
    fn builds_valid_graph_from_default_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = NamePool::default();
        let graph = build_graph(&pool, &mut rng).unwrap();
        check_invariants(&graph, &pool);
    }

    #[test]
    fn exactly_seven_names_is_enough() {
        let pool = NamePool::new(["a", "b", "c", "d", "e", "f", "g"]);
        let mut rng = StdRng::seed_from_u64(7);
        let graph = GraphBuilder::new(pool.clone()).build(&mut rng).unwrap();
        check_invariants(&graph, &pool);
    }

    #[test]
    fn too_few_names_is_rejected() {
        let pool = NamePool::new(["a", "b", "c", "d", "e", "f"]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = build_graph(&pool, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientNames {
                available: 6,
                required: 7
            }
        ));
    }

    #[test]
    fn duplicate_names_do_not_count_twice() {
        let pool = NamePool::new(["a", "b", "c", "d", "e", "f", "a", "b"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            build_graph(&pool, &mut rng),
            Err(CoreError::InsufficientNames { available: 6, .. })
        ));
    }

    #[test]
    fn builder_leaves_its_pool_untouched() {
        let builder = GraphBuilder::default();
        let mut rng = StdRng::seed_from_u64(3);
        builder.build(&mut rng).unwrap();
        assert_eq!(builder.pool().distinct_len(), 10);
    }

    #[test]
    fn same_seed_same_graph() {
        let pool = NamePool::default();
        let a = build_graph(&pool, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = build_graph(&pool, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_seed(seed in any::<u64>()) {
            let pool = NamePool::default();
            let graph = build_graph(&pool, &mut StdRng::seed_from_u64(seed)).unwrap();
            check_invariants(&graph, &pool);
        }
    }
}
