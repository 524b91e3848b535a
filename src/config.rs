use crate::consts;
use crate::game::GameConfig;
use log::LevelFilter;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameSettings,

    /// Settings about logging
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameSettings {
    /// How many times per second the creature moves
    ticks_per_second: NonZeroU32,

    /// Whether to keep food from being placed underneath the creature
    food_avoids_creature: bool,
}

impl GameSettings {
    pub(crate) fn to_game_config(self) -> GameConfig {
        GameConfig {
            grid: consts::GRID,
            ticks_per_second: self.ticks_per_second,
            food_avoids_creature: self.food_avoids_creature,
        }
    }
}

impl Default for GameSettings {
    fn default() -> GameSettings {
        let GameConfig {
            ticks_per_second,
            food_avoids_creature,
            ..
        } = GameConfig::default();
        GameSettings {
            ticks_per_second,
            food_avoids_creature,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level of messages to log
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawLogConfig {
    file: Option<String>,
    level: LevelFilter,
}

impl Default for RawLogConfig {
    fn default() -> RawLogConfig {
        RawLogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = ExpandError;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, ExpandError> {
        Ok(LogConfig {
            file: value.file.as_deref().map(expand_tilde).transpose()?,
            level: value.level,
        })
    }
}

/// Expand a leading `~` in `path` to the user's home directory
fn expand_tilde(path: &str) -> Result<PathBuf, ExpandError> {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/") {
        rest
    } else {
        return Ok(PathBuf::from(path));
    };
    let home = dirs::home_dir().ok_or(ExpandError)?;
    Ok(if rest.is_empty() {
        home
    } else {
        home.join(rest)
    })
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("failed to expand `~`: could not determine home directory")]
pub(crate) struct ExpandError;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn load_str(src: &str) -> Result<Config, ConfigError> {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile should be created");
        file.write_all(src.as_bytes())
            .expect("tempfile should be writable");
        file.flush().expect("tempfile should be flushed");
        Config::load(file.path(), false)
    }

    #[test]
    fn empty_file() {
        let cfg = load_str("").expect("empty config should parse");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.game.to_game_config(), GameConfig::default());
        assert_eq!(cfg.log.file, None);
        assert_eq!(cfg.log.level, LevelFilter::Info);
    }

    #[test]
    fn full_file() {
        let cfg = load_str(concat!(
            "[game]\n",
            "ticks-per-second = 12\n",
            "food-avoids-creature = true\n",
            "\n",
            "[log]\n",
            "file = \"/tmp/gridsnake.log\"\n",
            "level = \"debug\"\n",
        ))
        .expect("config should parse");
        let game = cfg.game.to_game_config();
        assert_eq!(game.ticks_per_second.get(), 12);
        assert!(game.food_avoids_creature);
        assert_eq!(game.grid, consts::GRID);
        assert_eq!(cfg.log.file, Some(PathBuf::from("/tmp/gridsnake.log")));
        assert_eq!(cfg.log.level, LevelFilter::Debug);
    }

    #[test]
    fn partial_game_table() {
        let cfg = load_str("[game]\nfood-avoids-creature = true\n").expect("config should parse");
        let game = cfg.game.to_game_config();
        assert_eq!(game.ticks_per_second, consts::TICKS_PER_SECOND);
        assert!(game.food_avoids_creature);
        assert_eq!(cfg.log, LogConfig::default());
    }

    #[rstest]
    #[case("[game]\nticks-per-second = 0\n")]
    #[case("[game]\nticks-per-second = \"fast\"\n")]
    #[case("[log]\nlevel = \"loud\"\n")]
    #[case("[game\n")]
    fn invalid(#[case] src: &str) {
        assert!(matches!(load_str(src), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.toml");
        assert_eq!(
            Config::load(&path, true).expect("missing file should be allowed"),
            Config::default()
        );
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[rstest]
    #[case("/var/log/snake.log", Some(PathBuf::from("/var/log/snake.log")))]
    #[case("snake.log", Some(PathBuf::from("snake.log")))]
    #[case("~user/snake.log", Some(PathBuf::from("~user/snake.log")))]
    #[case("~/logs/snake.log", dirs::home_dir().map(|p| p.join("logs/snake.log")))]
    #[case("~", dirs::home_dir())]
    fn test_expand_tilde(#[case] path: &str, #[case] expanded: Option<PathBuf>) {
        assert_eq!(expand_tilde(path).ok(), expanded);
    }
}
