use std::path::Path;

use colored::Colorize;
use rk_core::{RiddleSet, validate_sets};

pub fn run(path: &Path) -> Result<(), String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
    let sets: Vec<RiddleSet> = serde_json::from_str(&json)
        .map_err(|e| format!("malformed catalog '{}': {e}", path.display()))?;

    let issues = validate_sets(&sets);
    if issues.is_empty() {
        println!("  {} All checks passed for '{}'.", "ok".green().bold(), path.display());
        let words: usize = sets.iter().map(RiddleSet::word_count).sum();
        println!("  {} riddle sets, {} words", sets.len(), words);
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  {} {issue}", "error:".red().bold());
    }
    Err(format!(
        "{} issue{} found",
        issues.len(),
        if issues.len() == 1 { "" } else { "s" }
    ))
}
