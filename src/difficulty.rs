use std::fmt;
use std::time::Duration;

use crate::render::Rgb;

/// Difficulty chosen before a run. The profile is copied into the run when
/// it starts, so changing the selection never affects a run in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Constants that define a difficulty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    /// Play-area units an obstacle moves left per tick.
    pub speed: f64,
    pub spawn_interval: Duration,
    /// Height of the passable gap in play-area units.
    pub gap_size: f64,
    pub label: &'static str,
    pub icon: char,
    pub accent: Rgb,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn profile(self) -> Profile {
        match self {
            Difficulty::Easy => Profile {
                speed: 1.5,
                spawn_interval: Duration::from_millis(2500),
                gap_size: 30.0,
                label: "Easy",
                icon: '♣',
                accent: Rgb(52, 211, 153),
            },
            Difficulty::Medium => Profile {
                speed: 2.0,
                spawn_interval: Duration::from_millis(2000),
                gap_size: 25.0,
                label: "Medium",
                icon: '♦',
                accent: Rgb(251, 146, 60),
            },
            Difficulty::Hard => Profile {
                speed: 2.8,
                spawn_interval: Duration::from_millis(1500),
                gap_size: 20.0,
                label: "Hard",
                icon: '♠',
                accent: Rgb(244, 63, 94),
            },
        }
    }

    /// Key shown next to the option on the selection screen.
    pub const fn hotkey(self) -> char {
        match self {
            Difficulty::Easy => '1',
            Difficulty::Medium => '2',
            Difficulty::Hard => '3',
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().label)
    }
}
