use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rc_core::rooms;

pub fn run(dir: &Path) -> Result<(), String> {
    let graph = rooms::read_rooms(dir).map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Kind", "Connections"]);

    for room in graph.rooms() {
        table.add_row(vec![
            room.id.index().to_string(),
            room.name.clone(),
            room.kind.to_string(),
            graph.neighbor_names(room.id).join(", "),
        ]);
    }

    println!("{table}");
    println!();

    if !graph.is_connected() {
        return Err("some rooms cannot be reached from the start room".into());
    }

    println!(
        "  {}",
        format!("All checks passed for '{}'.", dir.display()).green()
    );
    println!("  {} rooms", graph.rooms().len());

    Ok(())
}
