use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use directories::ProjectDirs;

use crate::difficulty::Difficulty;

const STORE_FILE: &str = "highscore.json";
const LOG_FILE: &str = "flappy-term.log";

#[derive(Debug, Clone, Parser)]
#[command(name = "flappy-term", version)]
#[command(about = "Flap between the trees. Space or click to jump.")]
pub struct Config {
    /// Difficulty preselected for the first run.
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Start with sound turned off.
    #[arg(long, default_value_t = false)]
    pub mute: bool,

    /// Where to keep the high score (defaults to the user data directory).
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Where to write the log (defaults to the user data directory).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Simulation step in milliseconds.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// `None` when there is no data directory to fall back to.
    pub fn store_path(&self) -> Option<PathBuf> {
        self.store
            .clone()
            .or_else(|| data_dir().map(|dir| dir.join(STORE_FILE)))
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| data_dir().map(|dir| dir.join(LOG_FILE)))
    }
}

/// Platform data directory for the game, e.g. `~/.local/share/flappy-term`.
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "flappy-term").map(|dirs| dirs.data_dir().to_path_buf())
}
