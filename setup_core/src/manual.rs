//! ManualSetup - building a match piece by piece
//!
//! This is the state behind an interactive setup wizard: create or modify
//! the player, add predefined or custom opponents, modify or delete them,
//! show the configuration, and finally build a game.

use crate::archetype::Archetype;
use crate::constants::GameConstants;
use crate::roster::{CharacterSpec, RosterFile};
use crate::SetupError;
use combat_core::{Character, Game, GameError, PolicyConfig, PotionForge, ThresholdPolicy};

/// Whether a player operation created a new character or changed the existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupChange {
    Created,
    Modified,
}

#[derive(Debug, Clone)]
pub struct ManualSetup {
    constants: GameConstants,
    forge: PotionForge,
    player: Option<Character>,
    opponents: Vec<Character>,
    policy: PolicyConfig,
}

impl ManualSetup {
    pub fn new(constants: GameConstants) -> Self {
        ManualSetup {
            constants,
            forge: PotionForge::new(),
            player: None,
            opponents: Vec::new(),
            policy: PolicyConfig::default(),
        }
    }

    /// Setup holding every character of a roster file
    pub fn from_roster(roster: &RosterFile, constants: GameConstants) -> Result<Self, SetupError> {
        let mut setup = Self::new(constants);
        setup.create_or_modify_player(&roster.player)?;
        for entry in &roster.opponents {
            let opponent = entry.build(&setup.constants, &mut setup.forge)?;
            setup.opponents.push(opponent);
        }
        setup.policy = roster.policy;
        Ok(setup)
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    pub fn player(&self) -> Option<&Character> {
        self.player.as_ref()
    }

    pub fn opponents(&self) -> &[Character] {
        &self.opponents
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: PolicyConfig) {
        self.policy = policy;
    }

    /// Create the player, or reconfigure the existing one
    pub fn create_or_modify_player(&mut self, spec: &CharacterSpec) -> Result<SetupChange, SetupError> {
        if let Some(player) = self.player.as_mut() {
            spec.apply_to(player, &mut self.forge)?;
            tracing::debug!(player = player.name(), "player modified");
            return Ok(SetupChange::Modified);
        }

        let player = spec.build(&mut self.forge)?;
        tracing::debug!(player = player.name(), "player created");
        self.player = Some(player);
        Ok(SetupChange::Created)
    }

    pub fn add_predefined_opponent(&mut self, archetype: Archetype) -> Result<&Character, SetupError> {
        let opponent = archetype.build(None, &self.constants, &mut self.forge)?;
        Ok(self.push_opponent(opponent))
    }

    pub fn add_opponent(&mut self, spec: &CharacterSpec) -> Result<&Character, SetupError> {
        let opponent = spec.build(&mut self.forge)?;
        Ok(self.push_opponent(opponent))
    }

    /// Reconfigure the opponent at 0-based `index`
    pub fn modify_opponent(&mut self, index: usize, spec: &CharacterSpec) -> Result<(), SetupError> {
        let count = self.opponents.len();
        let opponent = self
            .opponents
            .get_mut(index)
            .ok_or(SetupError::UnknownOpponent { index, count })?;
        spec.apply_to(opponent, &mut self.forge)
    }

    /// Delete the opponent at 0-based `index`
    pub fn remove_opponent(&mut self, index: usize) -> Result<Character, SetupError> {
        if index >= self.opponents.len() {
            return Err(SetupError::UnknownOpponent {
                index,
                count: self.opponents.len(),
            });
        }
        let removed = self.opponents.remove(index);
        tracing::debug!(opponent = removed.name(), "opponent removed");
        Ok(removed)
    }

    /// A player exists and there is at least one opponent
    pub fn is_valid(&self) -> bool {
        self.player.is_some() && !self.opponents.is_empty()
    }

    /// Multi-line description of the current configuration
    pub fn config(&self) -> String {
        let mut info = String::from("PLAYER:");
        match &self.player {
            Some(player) => info.push_str(&format!("\n{}", player.who())),
            None => info.push_str("\nThe player has not been created yet."),
        }

        info.push_str("\nOPPONENT(S):");
        if self.opponents.is_empty() {
            info.push_str("\nNo opponent has been created yet.");
        }
        for (index, opponent) in self.opponents.iter().enumerate() {
            info.push_str(&format!("\n{}. {}", index + 1, opponent.who()));
        }
        info
    }

    /// Build a fresh game from copies of the configured characters
    ///
    /// The setup itself is left untouched, so it can build any number of rematches.
    pub fn build_game(&self) -> Result<Game, SetupError> {
        let player = self.player.clone().ok_or_else(|| {
            GameError::InvalidSetup("the player has not been created".to_string())
        })?;
        let game = Game::new(player, self.opponents.clone())?
            .with_policy(ThresholdPolicy::new(self.policy));
        Ok(game)
    }

    fn push_opponent(&mut self, opponent: Character) -> &Character {
        tracing::debug!(opponent = opponent.name(), "opponent added");
        self.opponents.push(opponent);
        &self.opponents[self.opponents.len() - 1]
    }
}
