//! Roster files - characters and policy described in TOML
//!
//! ```toml
//! [player]
//! name = "Hero"
//! max_life = 50
//! attack = [5, 10]
//! can_drink_potion = true
//! potions = [[15, 50], [15, 50]]
//!
//! [[opponents]]
//! archetype = "goblin"
//!
//! [[opponents]]
//! name = "Ogre"
//! max_life = 90
//! attack = [4, 12]
//!
//! [policy]
//! low_percent = 30.0
//! ```

use crate::archetype::Archetype;
use crate::constants::GameConstants;
use crate::SetupError;
use combat_core::{Character, CharacterStats, Inventory, PolicyConfig, PotionForge};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to build one character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub name: String,
    pub max_life: i32,
    /// `[min, max]` damage per attack
    pub attack: [i32; 2],
    #[serde(default)]
    pub can_drink_potion: bool,
    /// One `[min, max]` recovery range per potion, in bag order
    #[serde(default)]
    pub potions: Vec<[i32; 2]>,
}

impl CharacterSpec {
    pub fn new(name: impl Into<String>, max_life: i32, attack: [i32; 2], can_drink_potion: bool) -> Self {
        CharacterSpec {
            name: name.into(),
            max_life,
            attack,
            can_drink_potion,
            potions: Vec::new(),
        }
    }

    /// Add `count` potions recovering `recovery` life
    pub fn with_potions(mut self, count: usize, recovery: [i32; 2]) -> Self {
        self.potions.extend(std::iter::repeat(recovery).take(count));
        self
    }

    /// Spec describing an existing character's stats and remaining full potions
    pub fn from_character(character: &Character) -> Self {
        let stats = character.stats();
        CharacterSpec {
            name: character.name().to_string(),
            max_life: stats.max_life(),
            attack: [stats.attack_min(), stats.attack_max()],
            can_drink_potion: stats.can_drink_potion(),
            potions: character
                .inventory()
                .iter()
                .filter_map(|item| item.as_potion())
                .filter(|potion| !potion.is_empty())
                .map(|potion| [potion.min_recovery(), potion.max_recovery()])
                .collect(),
        }
    }

    fn stats(&self) -> Result<CharacterStats, SetupError> {
        Ok(CharacterStats::new(
            self.max_life,
            self.attack[0],
            self.attack[1],
            self.can_drink_potion,
        )?)
    }

    /// Brew every potion or none: ids are only taken from `forge` on success
    fn inventory(&self, forge: &mut PotionForge) -> Result<Inventory, SetupError> {
        let mut trial = forge.clone();
        let mut inventory = Inventory::new();
        for [min, max] in &self.potions {
            inventory.add(trial.brew(*min, *max)?);
        }
        *forge = trial;
        Ok(inventory)
    }

    /// Build a fresh character, brewing its potions from `forge`
    pub fn build(&self, forge: &mut PotionForge) -> Result<Character, SetupError> {
        let mut character = Character::new(self.name.clone(), self.stats()?, Inventory::new())?;
        let inventory = self.inventory(forge)?;
        *character.inventory_mut() = inventory;
        Ok(character)
    }

    /// Reconfigure `character` in place. Nothing changes if the spec is invalid.
    pub fn apply_to(&self, character: &mut Character, forge: &mut PotionForge) -> Result<(), SetupError> {
        // Validate everything before touching the character
        let rebuilt = self.build(forge)?;
        character.rename(rebuilt.name())?;
        character.set_stats(*rebuilt.stats());
        let inventory = character.inventory_mut();
        inventory.clear();
        inventory.add_all(rebuilt.inventory().iter().cloned());
        Ok(())
    }
}

/// An opponent in a roster file: either a predefined archetype or a full spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpponentEntry {
    Archetype {
        archetype: Archetype,
        #[serde(default)]
        name: Option<String>,
    },
    Custom(CharacterSpec),
}

impl OpponentEntry {
    pub fn build(&self, constants: &GameConstants, forge: &mut PotionForge) -> Result<Character, SetupError> {
        match self {
            OpponentEntry::Archetype { archetype, name } => {
                archetype.build(name.as_deref(), constants, forge)
            }
            OpponentEntry::Custom(spec) => spec.build(forge),
        }
    }
}

/// TOML description of a whole match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterFile {
    pub player: CharacterSpec,
    #[serde(default)]
    pub opponents: Vec<OpponentEntry>,
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl RosterFile {
    /// Load a roster from a TOML file
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let content = std::fs::read_to_string(path).map_err(|e| SetupError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;

        let roster = Self::from_toml_str(&content).map_err(|e| SetupError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;

        if roster.opponents.is_empty() {
            return Err(SetupError::Validation {
                message: "roster has no opponents".to_string(),
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), opponents = roster.opponents.len(), "roster loaded");
        Ok(roster)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::PotionId;
    use std::io::Write;
    use tempfile::TempDir;

    const ROSTER: &str = r#"
[player]
name = "Hero"
max_life = 50
attack = [5, 10]
can_drink_potion = true
potions = [[15, 50], [0, 0]]

[[opponents]]
archetype = "goblin"

[[opponents]]
archetype = "dragon"
name = "Smaug"

[[opponents]]
name = "Ogre"
max_life = 90
attack = [4, 12]

[policy]
low_percent = 30.0
"#;

    fn write_roster(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("roster.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_roster() {
        let dir = TempDir::new().unwrap();
        let roster = RosterFile::load(&write_roster(dir.path(), ROSTER)).unwrap();

        assert_eq!(roster.player.name, "Hero");
        assert_eq!(roster.player.potions, vec![[15, 50], [0, 0]]);
        assert_eq!(
            roster.opponents[0],
            OpponentEntry::Archetype {
                archetype: Archetype::Goblin,
                name: None
            }
        );
        assert_eq!(
            roster.opponents[1],
            OpponentEntry::Archetype {
                archetype: Archetype::Dragon,
                name: Some("Smaug".to_string())
            }
        );
        match &roster.opponents[2] {
            OpponentEntry::Custom(spec) => {
                assert_eq!(spec.name, "Ogre");
                assert!(!spec.can_drink_potion);
                assert!(spec.potions.is_empty());
            }
            other => panic!("Expected custom opponent, got {other:?}"),
        }
        assert_eq!(roster.policy.low_percent, 30.0);
        assert_eq!(roster.policy.critical_percent, 5.0);
    }

    #[test]
    fn test_roster_without_opponents() {
        let dir = TempDir::new().unwrap();
        let path = write_roster(
            dir.path(),
            "[player]\nname = \"Hero\"\nmax_life = 10\nattack = [1, 2]\n",
        );
        let err = RosterFile::load(&path).unwrap_err();
        assert!(matches!(err, SetupError::Validation { .. }));
    }

    #[test]
    fn test_roster_parse_error_carries_path() {
        let dir = TempDir::new().unwrap();
        let path = write_roster(dir.path(), "[player\nname = 3");
        match RosterFile::load(&path).unwrap_err() {
            SetupError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_build_spec() {
        let mut forge = PotionForge::new();
        let spec = CharacterSpec::new("Hero", 40, [3, 6], true).with_potions(2, [10, 20]);
        let hero = spec.build(&mut forge).unwrap();
        assert_eq!(hero.current_life(), 40);
        assert_eq!(hero.inventory().potion_count(), 2);
        assert_eq!(CharacterSpec::from_character(&hero), spec);
    }

    #[test]
    fn test_invalid_spec() {
        let mut forge = PotionForge::new();
        let bad_stats = CharacterSpec::new("Hero", 0, [3, 6], true);
        assert!(matches!(
            bad_stats.build(&mut forge),
            Err(SetupError::Character(combat_core::CharacterError::InvalidStats(_)))
        ));

        let bad_potion = CharacterSpec::new("Hero", 10, [3, 6], true).with_potions(1, [9, 2]);
        assert!(matches!(
            bad_potion.build(&mut forge),
            Err(SetupError::Potion(combat_core::PotionError::Poison { min: 9, max: 2 }))
        ));

        let bad_name = CharacterSpec::new("", 10, [3, 6], true);
        assert!(matches!(
            bad_name.build(&mut forge),
            Err(SetupError::Character(combat_core::CharacterError::InvalidName))
        ));
    }

    #[test]
    fn test_rejected_spec_keeps_forge_ids() {
        let mut forge = PotionForge::new();
        let unnamed = CharacterSpec::new("", 10, [3, 6], true).with_potions(2, [10, 20]);
        assert!(unnamed.build(&mut forge).is_err());
        assert_eq!(forge.peek_next_id(), PotionId(1));

        let mut half_bad = CharacterSpec::new("Hero", 10, [3, 6], true).with_potions(1, [10, 20]);
        half_bad.potions.push([9, 2]);
        assert!(half_bad.build(&mut forge).is_err());
        assert_eq!(forge.peek_next_id(), PotionId(1));

        let hero = CharacterSpec::new("Hero", 10, [3, 6], true)
            .with_potions(1, [10, 20])
            .build(&mut forge)
            .unwrap();
        assert_eq!(hero.inventory().potion_count(), 1);
        assert_eq!(forge.peek_next_id(), PotionId(2));
    }

    #[test]
    fn test_apply_to_is_all_or_nothing() {
        let mut forge = PotionForge::new();
        let mut hero = CharacterSpec::new("Hero", 40, [3, 6], true)
            .with_potions(1, [10, 20])
            .build(&mut forge)
            .unwrap();

        let invalid = CharacterSpec::new("Renamed", 40, [8, 2], true);
        assert!(invalid.apply_to(&mut hero, &mut forge).is_err());
        assert_eq!(hero.name(), "Hero");
        assert_eq!(hero.inventory().potion_count(), 1);

        let valid = CharacterSpec::new("Renamed", 70, [1, 2], false);
        valid.apply_to(&mut hero, &mut forge).unwrap();
        assert_eq!(hero.name(), "Renamed");
        assert_eq!(hero.current_life(), 70);
        assert!(!hero.stats().can_drink_potion());
        assert!(hero.inventory().is_empty());
    }
}
