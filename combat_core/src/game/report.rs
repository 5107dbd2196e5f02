//! Turn reports - what happened during a turn, for presentation layers

use crate::character::{Character, DrinkOutcome};
use serde::Serialize;

/// Who acted or was acted upon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    Player,
    /// 0-based position in the opponent list
    Opponent(usize),
}

/// Final outcome of a match, from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    InProgress,
    Over(GameResult),
}

impl GameState {
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Over(_))
    }

    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameState::Over(result) => Some(*result),
            GameState::InProgress => None,
        }
    }
}

/// A single resolved step of a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TurnEvent {
    Attacked {
        attacker: Actor,
        target: Actor,
        damage: i32,
        target_life: i32,
    },
    DrankPotion {
        actor: Actor,
        outcome: DrinkOutcome,
        life: i32,
    },
    /// The actor searched its bag last turn and loses this one
    SkippedTurn { actor: Actor },
    AlreadyDead { actor: Actor },
}

/// Life of one character at the end of a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeStatus {
    pub actor: Actor,
    pub name: String,
    pub current_life: i32,
    pub max_life: i32,
}

impl LifeStatus {
    pub(crate) fn of(actor: Actor, character: &Character) -> Self {
        LifeStatus {
            actor,
            name: character.name().to_string(),
            current_life: character.current_life(),
            max_life: character.stats().max_life(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.current_life <= 0
    }
}

/// Everything a turn produced, in resolution order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    pub turn: u32,
    pub events: Vec<TurnEvent>,
    /// Player first, then opponents in list order
    pub life: Vec<LifeStatus>,
    pub state: GameState,
}

impl TurnReport {
    /// Display name of an actor, as of this turn
    pub fn name_of(&self, actor: Actor) -> &str {
        self.life
            .iter()
            .find(|status| status.actor == actor)
            .map_or("?", |status| status.name.as_str())
    }
}
