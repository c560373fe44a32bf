use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use rk_scores::{FileLeaderboard, LeaderboardStore};

pub fn run(path: &Path, top: usize, name: Option<&str>) -> Result<(), String> {
    let board = FileLeaderboard::open(path)
        .map_err(|e| format!("cannot open leaderboard '{}': {e}", path.display()))?;

    let entries = board.top(top);
    if entries.is_empty() {
        println!("  No scores recorded yet.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Name", "Score", "Recorded"]);
        for (i, entry) in entries.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                entry.name.clone(),
                entry.score.to_string(),
                entry.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
            ]);
        }
        println!("{table}");
    }

    if let Some(name) = name {
        match board.best_for(name) {
            Some(best) => println!("  Best for {name}: {best}"),
            None => println!("  No scores for {name}."),
        }
    }

    Ok(())
}
