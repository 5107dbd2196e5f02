//! bag_core - Dice, potions and inventories
//!
//! This crate provides the leaf pieces of the arena simulator:
//! - RangeRoller: injectable source of uniform integer rolls
//! - Potion / PotionForge: single-use recovery consumables and their id counter
//! - Item: what a bag can hold
//! - Inventory: ordered, duplicate-permitting bag with potion lookups

pub mod dice;
pub mod inventory;
pub mod item;
pub mod potion;

pub use dice::{RangeRoller, RngRoller, ScriptedRoller};
pub use inventory::Inventory;
pub use item::{Item, Trinket};
pub use potion::{Potion, PotionForge, PotionId};

use thiserror::Error;

/// Error creating or drinking a potion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PotionError {
    #[error("Poison potion: recovery range {min}..={max} is invalid (bounds must be >= 0 and min <= max)")]
    Poison { min: i32, max: i32 },
    #[error("Potion {id} is already empty")]
    Empty { id: PotionId },
}
