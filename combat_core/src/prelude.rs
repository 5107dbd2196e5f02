//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Characters
pub use crate::character::{Action, Character, DrinkOutcome, POTION_NOT_FOUND};
pub use crate::stats::CharacterStats;

// Engine
pub use crate::game::{
    ActionContext, Actor, Game, GameResult, GameState, PlayerActionSource, TurnEvent, TurnReport,
};

// Opponents
pub use crate::policy::{OpponentPolicy, PolicyConfig, ThresholdPolicy};

// Errors
pub use crate::{CharacterError, GameError};

// Re-exports from bag_core
pub use bag_core::{Inventory, Item, Potion, PotionForge, RangeRoller, RngRoller};
