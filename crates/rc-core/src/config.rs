//! Configuration for a single game.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::names::NamePool;
use crate::rooms;

/// Prefix for room directories created without an explicit path.
pub const DEFAULT_DIR_PREFIX: &str = "roomcrawl";

/// Configuration for one game.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for a reproducible graph. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Where room files are written. `None` uses `<prefix>.rooms.<pid>`.
    pub rooms_dir: Option<PathBuf>,
    /// Keep the room files after the game ends.
    pub keep_rooms: bool,
    /// Candidate room names.
    pub name_pool: NamePool,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the room directory.
    pub fn with_rooms_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.rooms_dir = Some(dir.into());
        self
    }

    /// Keep or remove room files once the game is over.
    pub fn with_keep_rooms(mut self, keep: bool) -> Self {
        self.keep_rooms = keep;
        self
    }

    /// Replace the name pool.
    pub fn with_name_pool(mut self, pool: NamePool) -> Self {
        self.name_pool = pool;
        self
    }

    /// A random source honoring the configured seed.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// The directory room files go to.
    pub fn rooms_dir(&self) -> PathBuf {
        self.rooms_dir
            .clone()
            .unwrap_or_else(|| rooms::default_dir(DEFAULT_DIR_PREFIX))
    }
}
