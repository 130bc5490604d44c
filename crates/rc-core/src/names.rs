use rand::Rng;

/// Names offered when no custom pool is configured.
pub const DEFAULT_NAMES: [&str; 10] = [
    "Lila's Room",
    "Lila's Cell",
    "Mother's Secret Office",
    "Kitchen",
    "Basement Torture Chamber",
    "Rooftop Deck",
    "Master Bedroom",
    "Dark Closet",
    "Basement Work Shop",
    "Dining Room",
];

/// An ordered set of candidate room names, drawn from without replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePool {
    names: Vec<String>,
}

impl Default for NamePool {
    fn default() -> Self {
        Self::new(DEFAULT_NAMES)
    }
}

impl NamePool {
    /// Build a pool from `names`, keeping the first occurrence of each.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pool: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !pool.contains(&name) {
                pool.push(name);
            }
        }
        Self { names: pool }
    }

    /// Number of distinct names still available.
    pub fn distinct_len(&self) -> usize {
        self.names.len()
    }

    /// Whether the pool has run dry.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Remaining names in pool order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Remove and return one name chosen uniformly at random.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.names.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.names.len());
        Some(self.names.swap_remove(index))
    }
}
