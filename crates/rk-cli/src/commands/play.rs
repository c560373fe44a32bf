use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use rk_engine::{GameConfig, SessionController};
use rk_scores::{FileLeaderboard, LeaderboardStore};
use rk_tui::app::GameApp;

/// Options for `rk play`.
pub struct PlayOptions {
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub time: Option<u32>,
    pub seed: Option<u64>,
    pub scores: PathBuf,
}

/// Load the rules file, then apply a round length given on the command line.
fn load_config(opts: &PlayOptions) -> Result<GameConfig, String> {
    let config = match &opts.config {
        Some(path) => GameConfig::load(path)
            .map_err(|e| format!("cannot load config '{}': {e}", path.display()))?,
        None => GameConfig::default(),
    };
    Ok(match opts.time {
        Some(secs) => config.with_initial_time(secs),
        None => config,
    })
}

pub fn run(opts: &PlayOptions) -> Result<(), String> {
    let catalog = super::load_catalog(opts.catalog.as_deref())?;
    let config = load_config(opts)?;
    let rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let controller = SessionController::new(&catalog, config, rng).map_err(|e| e.to_string())?;

    let scores = FileLeaderboard::open(&opts.scores)
        .map_err(|e| format!("cannot open leaderboard '{}': {e}", opts.scores.display()))?;
    let store: Box<dyn LeaderboardStore> = Box::new(scores);

    tracing::info!(sets = catalog.len(), seed = ?opts.seed, "starting game");
    let saved = rk_tui::terminal::run(GameApp::new(controller, Some(store)))?;

    for entry in &saved {
        println!("  Saved {entry}");
    }
    Ok(())
}
