//! Item - everything a bag can hold

use crate::potion::Potion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inventory item
///
/// Inventory only asks an item whether it is a potion; new kinds of items
/// add a variant here without touching the inventory code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Potion(Potion),
    Trinket(Trinket),
}

impl Item {
    /// The potion inside this item, if it is one
    pub fn as_potion(&self) -> Option<&Potion> {
        match self {
            Item::Potion(potion) => Some(potion),
            _ => None,
        }
    }

    pub fn into_potion(self) -> Option<Potion> {
        match self {
            Item::Potion(potion) => Some(potion),
            _ => None,
        }
    }

    pub fn is_potion(&self) -> bool {
        self.as_potion().is_some()
    }
}

impl From<Potion> for Item {
    fn from(potion: Potion) -> Self {
        Item::Potion(potion)
    }
}

impl From<Trinket> for Item {
    fn from(trinket: Trinket) -> Self {
        Item::Trinket(trinket)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Potion(potion) => potion.fmt(f),
            Item::Trinket(trinket) => trinket.fmt(f),
        }
    }
}

/// A keepsake with no effect in combat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trinket {
    name: String,
}

impl Trinket {
    pub fn new(name: impl Into<String>) -> Self {
        Trinket { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Trinket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
