//! Game constants configuration

use crate::SetupError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable defaults used by the canned setups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub player: PlayerConstants,
    #[serde(default)]
    pub opponent: OpponentConstants,
    #[serde(default)]
    pub potion: PotionConstants,
}

impl GameConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, SetupError> {
        let content = std::fs::read_to_string(path).map_err(|e| SetupError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;
        toml::from_str(&content).map_err(|e| SetupError::Parse {
            error: e,
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConstants {
    pub life: i32,
    /// `[min, max]` damage per attack
    pub attack: [i32; 2],
    pub potions: usize,
}

impl Default for PlayerConstants {
    fn default() -> Self {
        PlayerConstants {
            life: 50,
            attack: [5, 10],
            potions: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConstants {
    pub life: i32,
    pub attack: [i32; 2],
    pub potions: usize,
}

impl Default for OpponentConstants {
    fn default() -> Self {
        OpponentConstants {
            life: 50,
            attack: [5, 15],
            potions: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PotionConstants {
    /// `[min, max]` life recovered
    pub recovery: [i32; 2],
}

impl Default for PotionConstants {
    fn default() -> Self {
        PotionConstants { recovery: [15, 50] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[player]
life = 80

[potion]
recovery = [5, 20]
"#
        )
        .unwrap();

        let constants = GameConstants::load_from_path(file.path()).unwrap();
        assert_eq!(constants.player.life, 80);
        assert_eq!(constants.player.attack, [5, 10]);
        assert_eq!(constants.player.potions, 3);
        assert_eq!(constants.opponent, OpponentConstants::default());
        assert_eq!(constants.potion.recovery, [5, 20]);
    }

    #[test]
    fn test_missing_file() {
        let err = GameConstants::load_from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, SetupError::Io { .. }));
    }

    #[test]
    fn test_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[player]\nlife = \"lots\"\n").unwrap();
        let err = GameConstants::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, SetupError::Parse { .. }));
        assert!(err.to_string().starts_with("Parse error in '"));
    }
}
