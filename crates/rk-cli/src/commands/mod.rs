pub mod check;
pub mod list;
pub mod play;
pub mod scores;

use std::path::Path;

use rk_core::Catalog;

/// Leaderboard file used when none is given.
pub const DEFAULT_SCORES_FILE: &str = "riddlekeys-scores.json";

/// Load a catalog file, or the built-in catalog when no path is given.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => {
            Catalog::load(path).map_err(|e| format!("cannot load catalog '{}': {e}", path.display()))
        }
        None => Catalog::builtin().map_err(|e| format!("built-in catalog is broken: {e}")),
    }
}
