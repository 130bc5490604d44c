//! Build a fresh room graph, save it, and play it interactively.

use std::io;

use rc_core::{GameConfig, GraphBuilder, rooms};
use rc_nav::{NavigationEngine, run_session};
use tracing::warn;

pub fn run(config: &GameConfig) -> Result<(), String> {
    let mut rng = config.rng();
    let graph = GraphBuilder::new(config.name_pool.clone())
        .build(&mut rng)
        .map_err(|e| e.to_string())?;

    let dir = config.rooms_dir();
    if rooms::has_room_files(&dir) {
        return Err(format!(
            "'{}' already holds room files; pick another --dir",
            dir.display()
        ));
    }
    let created = !dir.exists();
    rooms::write_rooms(&graph, &dir).map_err(|e| e.to_string())?;

    // Play the copy read back from disk so a broken save fails before play.
    let result = rooms::read_rooms(&dir)
        .map_err(|e| e.to_string())
        .and_then(|loaded| {
            let mut engine = NavigationEngine::new(&loaded);
            run_session(&mut engine, io::stdin().lock(), io::stdout().lock())
                .map(|_| ())
                .map_err(|e| e.to_string())
        });

    // Only our room files go; the directory too if this run made it.
    if !config.keep_rooms {
        if let Err(e) = rooms::remove_rooms(&dir, created) {
            warn!(error = %e, "could not remove room files");
        }
    }

    result
}
