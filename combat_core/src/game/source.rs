//! Player action source - the seam to whoever controls the player

use crate::character::{Action, Character};

/// Read-only view handed to the action source when the player must act
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    pub turn: u32,
    pub player: &'a Character,
    pub opponents: &'a [Character],
}

impl ActionContext<'_> {
    /// Whether drinking is worth offering at all
    pub fn can_drink(&self) -> bool {
        self.player.stats().can_drink_potion()
    }

    /// Whether the player must pick a target when attacking
    pub fn needs_target(&self) -> bool {
        self.opponents.len() > 1
    }
}

/// Supplies the player's decisions
///
/// Implementations re-prompt until they have a valid answer; the engine
/// treats an out-of-range target as a contract violation.
pub trait PlayerActionSource {
    fn choose_action(&mut self, ctx: &ActionContext<'_>) -> Action;

    /// 1-based index into `ctx.opponents`. Only asked when there is more than one opponent.
    fn choose_target(&mut self, ctx: &ActionContext<'_>) -> usize;

    /// Called when the player's turn is skipped after searching for a potion
    fn acknowledge_skip(&mut self, _player: &Character) {}
}
