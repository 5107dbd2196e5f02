//! Potion - single-use life recovery

use crate::dice::RangeRoller;
use crate::PotionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier issued by a [`PotionForge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PotionId(pub u64);

impl fmt::Display for PotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A potion that gives back a random amount of life when drunk
///
/// A potion can be drunk exactly once; afterwards it stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    id: PotionId,
    min_recovery: i32,
    max_recovery: i32,
    #[serde(default)]
    empty: bool,
}

impl Potion {
    /// Create a full potion recovering between `min_recovery` and `max_recovery` life
    ///
    /// Fails with [`PotionError::Poison`] if a bound is negative or the range is inverted.
    pub fn new(id: PotionId, min_recovery: i32, max_recovery: i32) -> Result<Self, PotionError> {
        validate_recovery(min_recovery, max_recovery)?;
        Ok(Potion {
            id,
            min_recovery,
            max_recovery,
            empty: false,
        })
    }

    pub fn id(&self) -> PotionId {
        self.id
    }

    pub fn min_recovery(&self) -> i32 {
        self.min_recovery
    }

    pub fn max_recovery(&self) -> i32 {
        self.max_recovery
    }

    /// Whether this potion has been drunk
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Drink the potion, returning the life recovered
    ///
    /// The roll is uniform over the inclusive recovery range.
    pub fn drink(&mut self, roller: &mut dyn RangeRoller) -> Result<i32, PotionError> {
        tracing::debug!(potion = %self.id, "drinking potion");
        if self.empty {
            return Err(PotionError::Empty { id: self.id });
        }
        self.empty = true;
        Ok(roller.roll(self.min_recovery, self.max_recovery))
    }
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            write!(f, "Empty bottle (potion {})", self.id)
        } else {
            write!(
                f,
                "Potion {} (recovers {}-{} life)",
                self.id, self.min_recovery, self.max_recovery
            )
        }
    }
}

fn validate_recovery(min_recovery: i32, max_recovery: i32) -> Result<(), PotionError> {
    if min_recovery < 0 || max_recovery < 0 || min_recovery > max_recovery {
        return Err(PotionError::Poison {
            min: min_recovery,
            max: max_recovery,
        });
    }
    Ok(())
}

/// Issues potions with monotonically increasing ids
///
/// Ids are unique per forge. Whoever builds potions for a match owns the forge.
#[derive(Debug, Clone)]
pub struct PotionForge {
    next_id: u64,
}

impl Default for PotionForge {
    fn default() -> Self {
        PotionForge { next_id: 1 }
    }
}

impl PotionForge {
    /// Forge whose first potion gets id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Forge whose first potion gets `first_id`
    pub fn starting_at(first_id: u64) -> Self {
        PotionForge { next_id: first_id }
    }

    /// Brew a new potion. A rejected range does not consume an id.
    pub fn brew(&mut self, min_recovery: i32, max_recovery: i32) -> Result<Potion, PotionError> {
        validate_recovery(min_recovery, max_recovery)?;
        let id = PotionId(self.next_id);
        self.next_id += 1;
        let potion = Potion::new(id, min_recovery, max_recovery)?;
        tracing::debug!(potion = %id, min_recovery, max_recovery, "potion brewed");
        Ok(potion)
    }

    /// The id the next brewed potion will receive
    pub fn peek_next_id(&self) -> PotionId {
        PotionId(self.next_id)
    }
}
