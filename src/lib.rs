//! A Flappy Bird clone for the terminal.
//!
//! The play area is measured in percent units (0..100 on both axes) and
//! mapped onto a half-block pixel buffer at draw time, so the simulation is
//! independent of the terminal size.

pub mod audio;
pub mod config;
pub mod difficulty;
pub mod game;
pub mod input;
pub mod render;
pub mod store;
pub mod timer;
pub mod view;

pub use difficulty::{Difficulty, Profile};
pub use game::{Action, Event, Game, Mode, Run, Screen};
