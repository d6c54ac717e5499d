use std::path::Path;

use crate::ai::DepthLimit;
use crate::error::{ConfigError, SearchError};
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION};

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl BoardConfig {
    /// Both dimensions must lie in `1..=MAX_DIMENSION`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("board.rows", self.rows), ("board.cols", self.cols)] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "{name} must be between 1 and {MAX_DIMENSION}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Human,
    Random,
    /// Exhaustive minimax
    Minimax,
    /// Depth-limited minimax with the gap heuristic
    Heuristic,
    /// Minimax with alpha-beta pruning
    Prune,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub kind: AgentKind,
    /// Search depth for `heuristic`; absent means unlimited.
    pub depth: Option<i64>,
    /// Seed for `random`; absent means OS entropy.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            kind: AgentKind::Random,
            depth: None,
            seed: None,
        }
    }
}

impl AgentConfig {
    pub fn depth_limit(&self) -> Result<DepthLimit, SearchError> {
        DepthLimit::from_option(self.depth)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub player_one: AgentConfig,
    pub player_two: AgentConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            player_one: AgentConfig {
                kind: AgentKind::Heuristic,
                depth: Some(4),
                seed: None,
            },
            player_two: AgentConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
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
        self.board.validate()?;
        for (seat, agent) in [("player_one", &self.player_one), ("player_two", &self.player_two)] {
            if let Err(e) = agent.depth_limit() {
                return Err(ConfigError::Validation(format!("{seat}.depth: {e}")));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[player_two]
kind = "prune"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.player_two.kind, AgentKind::Prune);
        assert_eq!(config.player_two.depth, None);
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.player_one.kind, AgentKind::Heuristic);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.board, default.board);
        assert_eq!(config.player_one, default.player_one);
        assert_eq!(config.player_two, default.player_two);
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_cols() {
        let mut config = AppConfig::default();
        config.board.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.board.rows = usize::MAX;
        config.board.cols = 2;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "config validation error: board.rows must be between 1 and {MAX_DIMENSION}, got {}",
                usize::MAX
            )
        );

        let board = BoardConfig {
            rows: MAX_DIMENSION,
            cols: MAX_DIMENSION + 1,
        };
        assert!(matches!(board.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_largest_board_is_accepted() {
        let board = BoardConfig {
            rows: MAX_DIMENSION,
            cols: MAX_DIMENSION,
        };
        board.validate().expect("largest board should be valid");
    }

    #[test]
    fn test_validation_rejects_negative_depth() {
        let mut config = AppConfig::default();
        config.player_two.depth = Some(-3);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: player_two.depth: invalid depth limit -3: must be >= 0"
        );
    }

    #[test]
    fn test_unknown_agent_kind_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[player_one]\nkind = \"oracle\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.rows, DEFAULT_ROWS);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 4

[player_one]
kind = "random"
seed = 7
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 4);
        assert_eq!(config.board.cols, DEFAULT_COLS);
        assert_eq!(config.player_one.kind, AgentKind::Random);
        assert_eq!(config.player_one.seed, Some(7));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[player_one]\nkind = \"heuristic\"\ndepth = -1\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.player_one.depth, Some(4));
    }
}
