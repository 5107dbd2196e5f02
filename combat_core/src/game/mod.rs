//! Game - the turn engine
//!
//! A turn is one player phase followed by one phase per opponent, in list
//! order. The match is checked for its end only once the whole turn has
//! resolved, so an opponent killed mid-turn still lets the rest of the turn
//! play out, and a player killed by an early opponent still hears the later
//! ones swing.

mod report;
mod source;

pub use report::{Actor, GameResult, GameState, LifeStatus, TurnEvent, TurnReport};
pub use source::{ActionContext, PlayerActionSource};

use crate::character::{Action, Character};
use crate::policy::{OpponentPolicy, ThresholdPolicy};
use crate::GameError;
use bag_core::RangeRoller;

/// One player against one or more opponents
///
/// The game holds the characters for the length of the match and gives them
/// back through [`Game::into_characters`].
#[derive(Debug)]
pub struct Game {
    player: Character,
    opponents: Vec<Character>,
    turn: u32,
    state: GameState,
    policy: Box<dyn OpponentPolicy>,
}

impl Game {
    /// Set up a match. Fails with [`GameError::InvalidSetup`] without opponents.
    pub fn new(player: Character, opponents: Vec<Character>) -> Result<Self, GameError> {
        if opponents.is_empty() {
            return Err(GameError::InvalidSetup(
                "a game needs at least one opponent".to_string(),
            ));
        }

        let mut game = Game {
            player,
            opponents,
            turn: 0,
            state: GameState::InProgress,
            policy: Box::new(ThresholdPolicy::default()),
        };
        game.state = game.evaluate();
        tracing::debug!(settings = %game.settings_info(), "game created");
        Ok(game)
    }

    /// Replace the opponent policy
    pub fn with_policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn opponents(&self) -> &[Character] {
        &self.opponents
    }

    /// Number of turns played so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    pub fn into_characters(self) -> (Character, Vec<Character>) {
        (self.player, self.opponents)
    }

    /// Multi-line summary of every character and their inventory
    pub fn settings_info(&self) -> String {
        let mut info = String::from("Player:");
        push_character(&mut info, &self.player);
        info.push_str("\nOpponent(s):");
        for opponent in &self.opponents {
            push_character(&mut info, opponent);
        }
        info
    }

    /// Play turns until the match is over, handing each report to `observer`
    pub fn play(
        &mut self,
        source: &mut dyn PlayerActionSource,
        roller: &mut dyn RangeRoller,
        mut observer: impl FnMut(&TurnReport),
    ) -> Result<GameResult, GameError> {
        tracing::info!(opponents = self.opponents.len(), "match started");
        loop {
            if let GameState::Over(result) = self.state {
                tracing::info!(?result, turns = self.turn, "match over");
                return Ok(result);
            }
            let report = self.play_turn(source, roller)?;
            observer(&report);
        }
    }

    /// Play a single turn
    pub fn play_turn(
        &mut self,
        source: &mut dyn PlayerActionSource,
        roller: &mut dyn RangeRoller,
    ) -> Result<TurnReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        self.turn += 1;
        tracing::info!(turn = self.turn, "turn started");

        let mut events = Vec::new();
        self.player_phase(source, roller, &mut events)?;
        self.opponent_phase(roller, &mut events)?;

        self.state = self.evaluate();

        let mut life = vec![LifeStatus::of(Actor::Player, &self.player)];
        life.extend(
            self.opponents
                .iter()
                .enumerate()
                .map(|(index, opponent)| LifeStatus::of(Actor::Opponent(index), opponent)),
        );

        Ok(TurnReport {
            turn: self.turn,
            events,
            life,
            state: self.state,
        })
    }

    fn player_phase(
        &mut self,
        source: &mut dyn PlayerActionSource,
        roller: &mut dyn RangeRoller,
        events: &mut Vec<TurnEvent>,
    ) -> Result<(), GameError> {
        if self.player.took_a_potion() {
            self.player.reset_took_a_potion();
            source.acknowledge_skip(&self.player);
            tracing::debug!(character = self.player.name(), "turn skipped after potion search");
            events.push(TurnEvent::SkippedTurn {
                actor: Actor::Player,
            });
            return Ok(());
        }

        let ctx = ActionContext {
            turn: self.turn,
            player: &self.player,
            opponents: &self.opponents,
        };

        let action = source.choose_action(&ctx);
        match action {
            Action::Attack => {
                let index = if ctx.needs_target() {
                    let chosen = source.choose_target(&ctx);
                    if chosen == 0 || chosen > self.opponents.len() {
                        return Err(GameError::InvalidTarget {
                            index: chosen,
                            count: self.opponents.len(),
                        });
                    }
                    chosen - 1
                } else {
                    0
                };

                let target = &mut self.opponents[index];
                let damage = self.player.attacks(target, roller)?;
                events.push(TurnEvent::Attacked {
                    attacker: Actor::Player,
                    target: Actor::Opponent(index),
                    damage,
                    target_life: target.current_life(),
                });
            }
            Action::DrinkPotion => {
                let outcome = self.player.drink_a_potion(roller)?;
                events.push(TurnEvent::DrankPotion {
                    actor: Actor::Player,
                    outcome,
                    life: self.player.current_life(),
                });
            }
        }
        Ok(())
    }

    fn opponent_phase(
        &mut self,
        roller: &mut dyn RangeRoller,
        events: &mut Vec<TurnEvent>,
    ) -> Result<(), GameError> {
        for (index, opponent) in self.opponents.iter_mut().enumerate() {
            let actor = Actor::Opponent(index);

            if opponent.is_dead() {
                events.push(TurnEvent::AlreadyDead { actor });
                continue;
            }

            if opponent.took_a_potion() {
                opponent.reset_took_a_potion();
                tracing::debug!(character = opponent.name(), "turn skipped after potion search");
                events.push(TurnEvent::SkippedTurn { actor });
                continue;
            }

            let action = if opponent.stats().can_drink_potion() {
                self.policy.decide_action(opponent, roller)?
            } else {
                Action::Attack
            };

            match action {
                Action::Attack => {
                    let damage = opponent.attacks(&mut self.player, roller)?;
                    events.push(TurnEvent::Attacked {
                        attacker: actor,
                        target: Actor::Player,
                        damage,
                        target_life: self.player.current_life(),
                    });
                }
                Action::DrinkPotion => {
                    let outcome = opponent.drink_a_potion(roller)?;
                    events.push(TurnEvent::DrankPotion {
                        actor,
                        outcome,
                        life: opponent.current_life(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Player death takes precedence: a turn that leaves everyone dead is a loss
    fn evaluate(&self) -> GameState {
        if self.player.is_dead() {
            GameState::Over(GameResult::Loss)
        } else if self.opponents.iter().all(Character::is_dead) {
            GameState::Over(GameResult::Win)
        } else {
            GameState::InProgress
        }
    }
}

fn push_character(info: &mut String, character: &Character) {
    info.push_str(&format!("\n  {character}"));
    for item in character.inventory() {
        info.push_str(&format!("\n    {item}"));
    }
}
