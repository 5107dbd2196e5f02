mod archetype;
mod constants;
mod manual;
mod roster;

pub use archetype::{default_player, player_without_potions, Archetype, Preset};
pub use constants::{GameConstants, OpponentConstants, PlayerConstants, PotionConstants};
pub use manual::{ManualSetup, SetupChange};
pub use roster::{CharacterSpec, OpponentEntry, RosterFile};

use combat_core::{CharacterError, GameError, PotionError};
use std::path::PathBuf;
use thiserror::Error;

/// Error building a match setup
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("IO error reading '{}': {error}", .path.display())]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{}': {error}", .path.display())]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{}': {message}", .path.display())]
    Validation { message: String, path: PathBuf },
    #[error("Unknown opponent {index} (there are {count})")]
    UnknownOpponent { index: usize, count: usize },
    #[error(transparent)]
    Character(#[from] CharacterError),
    #[error(transparent)]
    Potion(#[from] PotionError),
    #[error(transparent)]
    Game(#[from] GameError),
}
