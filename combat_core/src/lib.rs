//! combat_core - Turn-based duels between a player and a band of opponents
//!
//! This library provides:
//! - CharacterStats / Character: validated stats, life, inventory and the two combat actions
//! - OpponentPolicy: how opponents pick their action each turn
//! - Game: the turn engine, producing one TurnReport per turn
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use combat_core::prelude::*;
//!
//! let mut forge = PotionForge::new();
//! let player = Character::new(
//!     "Hero",
//!     CharacterStats::new(50, 5, 10, true)?,
//!     Inventory::with_potions(&mut forge, 3, 15, 50)?,
//! )?;
//! let goblin = Character::new("Goblin", CharacterStats::new(35, 2, 10, false)?, Inventory::new())?;
//!
//! let mut game = Game::new(player, vec![goblin])?;
//! let mut roller = RngRoller::seeded(2024);
//! let result = game.play(&mut my_action_source, &mut roller, |report| println!("{:?}", report))?;
//! ```

pub mod character;
pub mod game;
pub mod policy;
pub mod prelude;
pub mod stats;

pub use character::{Action, Character, DrinkOutcome, POTION_NOT_FOUND};
pub use game::{
    ActionContext, Actor, Game, GameResult, GameState, LifeStatus, PlayerActionSource,
    TurnEvent, TurnReport,
};
pub use policy::{OpponentPolicy, PolicyConfig, ThresholdPolicy};
pub use stats::CharacterStats;

// Re-export the bag_core pieces every caller needs
pub use bag_core::{
    Inventory, Item, Potion, PotionError, PotionForge, PotionId, RangeRoller, RngRoller,
};

use thiserror::Error;

/// Error raised by a character action or by stats/name validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharacterError {
    #[error("Invalid stats: {0}")]
    InvalidStats(String),
    #[error("The name cannot be an empty string")]
    InvalidName,
    #[error("{0} is dead and cannot act")]
    DeadCharacter(String),
    #[error("{0} is unable to drink a potion")]
    UnableToDrinkPotion(String),
    #[error(transparent)]
    Potion(#[from] PotionError),
}

/// Error raised by the turn engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid setup: {0}")]
    InvalidSetup(String),
    #[error("Target {index} is out of range (1..={count})")]
    InvalidTarget { index: usize, count: usize },
    #[error("The game is already over")]
    GameOver,
    #[error(transparent)]
    Character(#[from] CharacterError),
}
