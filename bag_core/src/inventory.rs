//! Inventory - an ordered bag of items

use crate::item::Item;
use crate::potion::{Potion, PotionForge};
use crate::PotionError;
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-permitting container of items
///
/// Iteration follows insertion order. There is no capacity limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory holding `count` identical potions brewed from `forge`
    pub fn with_potions(
        forge: &mut PotionForge,
        count: usize,
        min_recovery: i32,
        max_recovery: i32,
    ) -> Result<Self, PotionError> {
        let mut inventory = Self::new();
        for _ in 0..count {
            inventory.add(forge.brew(min_recovery, max_recovery)?);
        }
        Ok(inventory)
    }

    /// Append one item
    pub fn add(&mut self, item: impl Into<Item>) {
        let item = item.into();
        tracing::debug!(%item, "item added to inventory");
        self.items.push(item);
    }

    /// Append every item, keeping their order
    pub fn add_all<I>(&mut self, items: impl IntoIterator<Item = I>)
    where
        I: Into<Item>,
    {
        for item in items {
            self.add(item);
        }
    }

    /// Remove the first item equal to `item`
    pub fn remove(&mut self, item: &Item) -> Option<Item> {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(index) => {
                tracing::debug!(%item, "item removed from inventory");
                Some(self.items.remove(index))
            }
            None => {
                tracing::debug!(%item, "item not found in inventory");
                None
            }
        }
    }

    /// Take the first potion out of the bag, skipping other items
    pub fn find_and_remove_potion(&mut self) -> Option<Potion> {
        let Some(index) = self.items.iter().position(Item::is_potion) else {
            tracing::debug!(items = self.items.len(), "no potion in inventory");
            return None;
        };
        let potion = self.items.remove(index).into_potion();
        if let Some(potion) = &potion {
            tracing::debug!(potion = %potion.id(), index, "potion taken from inventory");
        }
        potion
    }

    /// Whether at least one potion is in the bag
    pub fn has_potion(&self) -> bool {
        self.items.iter().any(Item::is_potion)
    }

    pub fn potion_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_potion()).count()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<I: Into<Item>> FromIterator<I> for Inventory {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        inventory.add_all(iter);
        inventory
    }
}
