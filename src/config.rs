//! AI tier configuration, loadable from TOML

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// AI strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiTier {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl AiTier {
    pub fn name(self) -> &'static str {
        match self {
            AiTier::Easy => "easy",
            AiTier::Normal => "normal",
            AiTier::Hard => "hard",
        }
    }
}

impl fmt::Display for AiTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AiTier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(AiTier::Easy),
            "normal" => Ok(AiTier::Normal),
            "hard" => Ok(AiTier::Hard),
            _ => Err(ConfigError::UnknownTier(s.to_string())),
        }
    }
}

/// Knobs for one AI tier.
///
/// `random_top` is the number of best candidates picked from uniformly when
/// the tier does not search; `depth == 0` disables the search entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierConfig {
    /// Chebyshev radius around stones for candidate moves
    pub radius: u8,
    /// Maximum candidates kept per node
    pub candidate_limit: usize,
    /// Pick uniformly among this many best candidates
    pub random_top: usize,
    /// Negamax depth in plies; 0 means no tree search
    pub depth: u8,
    /// Occupy the opponent's fork cells
    pub fork_block: bool,
    /// Play our own fork when one exists
    pub fork_create: bool,
    /// Break ties among equal root values at random
    pub randomize_ties: bool,
}

impl TierConfig {
    pub fn easy() -> Self {
        Self {
            radius: 2,
            candidate_limit: 18,
            random_top: 18,
            depth: 0,
            fork_block: false,
            fork_create: false,
            randomize_ties: false,
        }
    }

    pub fn normal() -> Self {
        Self {
            radius: 2,
            candidate_limit: 20,
            random_top: 6,
            depth: 0,
            fork_block: true,
            fork_create: false,
            randomize_ties: false,
        }
    }

    pub fn hard() -> Self {
        Self {
            radius: 2,
            candidate_limit: 40,
            random_top: 1,
            depth: 2,
            fork_block: true,
            fork_create: true,
            randomize_ties: false,
        }
    }

    /// Whether this tier runs the negamax search
    #[inline]
    pub fn searches(&self) -> bool {
        self.depth > 0
    }

    fn validate(&self, tier: AiTier) -> Result<(), ConfigError> {
        if self.radius == 0 {
            return Err(ConfigError::Validation(format!("{tier}.radius must be >= 1")));
        }
        if self.candidate_limit == 0 {
            return Err(ConfigError::Validation(format!(
                "{tier}.candidate_limit must be >= 1"
            )));
        }
        if self.random_top == 0 {
            return Err(ConfigError::Validation(format!("{tier}.random_top must be >= 1")));
        }
        if self.depth > 6 {
            return Err(ConfigError::Validation(format!("{tier}.depth must be <= 6")));
        }
        Ok(())
    }
}

/// Fields given for one tier in a config file; the rest keep the tier's defaults
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TierOverrides {
    radius: Option<u8>,
    candidate_limit: Option<usize>,
    random_top: Option<usize>,
    depth: Option<u8>,
    fork_block: Option<bool>,
    fork_create: Option<bool>,
    randomize_ties: Option<bool>,
}

impl TierOverrides {
    fn apply(self, base: TierConfig) -> TierConfig {
        TierConfig {
            radius: self.radius.unwrap_or(base.radius),
            candidate_limit: self.candidate_limit.unwrap_or(base.candidate_limit),
            random_top: self.random_top.unwrap_or(base.random_top),
            depth: self.depth.unwrap_or(base.depth),
            fork_block: self.fork_block.unwrap_or(base.fork_block),
            fork_create: self.fork_create.unwrap_or(base.fork_create),
            randomize_ties: self.randomize_ties.unwrap_or(base.randomize_ties),
        }
    }
}

/// On-disk layout: one optional table per tier
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    easy: TierOverrides,
    normal: TierOverrides,
    hard: TierOverrides,
}

/// Per-tier settings for the AI engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineConfig {
    pub easy: TierConfig,
    pub normal: TierConfig,
    pub hard: TierConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            easy: TierConfig::easy(),
            normal: TierConfig::normal(),
            hard: TierConfig::hard(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// Missing tables and fields fall back to the built-in tier defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let config = EngineConfig {
            easy: file.easy.apply(TierConfig::easy()),
            normal: file.normal.apply(TierConfig::normal()),
            hard: file.hard.apply(TierConfig::hard()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.easy.validate(AiTier::Easy)?;
        self.normal.validate(AiTier::Normal)?;
        self.hard.validate(AiTier::Hard)?;
        Ok(())
    }

    /// Settings for `tier`
    pub fn tier(&self, tier: AiTier) -> &TierConfig {
        match tier {
            AiTier::Easy => &self.easy,
            AiTier::Normal => &self.normal,
            AiTier::Hard => &self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse_case_insensitive() {
        assert_eq!("Hard".parse::<AiTier>().unwrap(), AiTier::Hard);
        assert_eq!(" normal ".parse::<AiTier>().unwrap(), AiTier::Normal);
        assert_eq!("EASY".parse::<AiTier>().unwrap(), AiTier::Easy);
        assert!(matches!(
            "expert".parse::<AiTier>(),
            Err(ConfigError::UnknownTier(s)) if s == "expert"
        ));
    }

    #[test]
    fn test_tier_default_is_easy() {
        assert_eq!(AiTier::default(), AiTier::Easy);
    }

    #[test]
    fn test_defaults_match_tiers() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tier(AiTier::Easy).random_top, 18);
        assert_eq!(config.tier(AiTier::Normal).candidate_limit, 20);
        assert!(config.tier(AiTier::Normal).fork_block);
        assert!(!config.tier(AiTier::Normal).searches());
        let hard = config.tier(AiTier::Hard);
        assert_eq!((hard.radius, hard.candidate_limit, hard.depth), (2, 40, 2));
        assert!(hard.fork_create);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [hard]
            depth = 3
            randomize_ties = true
            "#,
        )
        .unwrap();
        assert_eq!(config.hard.depth, 3);
        assert!(config.hard.randomize_ties);
        assert_eq!(config.hard.candidate_limit, 40);
        assert_eq!(config.normal, TierConfig::normal());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_validation_rejects_zero_radius() {
        let err = EngineConfig::from_toml_str("[easy]\nradius = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("easy.radius")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = EngineConfig::from_toml_str("[hard]\nbreadth = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = EngineConfig::from_toml_str("[hard\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = Path::new("/nonexistent/gomoku-config.toml");
        assert_eq!(EngineConfig::load_or_default(path).unwrap(), EngineConfig::default());
        assert!(matches!(EngineConfig::load(path), Err(ConfigError::FileRead { .. })));
    }
}
