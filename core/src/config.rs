use std::fmt;
use std::path::Path;

use crate::constants::SUPPORTED_TICK_RATES;
use crate::types::MatchConfig;

// Errors raised while loading or validating a match config.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    UnsupportedTickRate(u32),
    NonPositive(&'static str),
    WorldTooNarrow { world_width: f64, fighter_width: f64 },
    ZeroWinsNeeded,
    ZeroRoundTime,
    CostExceedsCap { cost: f64, max_energy: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "read config: {err}"),
            ConfigError::Parse(err) => write!(f, "parse config: {err}"),
            ConfigError::UnsupportedTickRate(rate) => write!(
                f,
                "tick_rate {rate} is not one of {:?}",
                SUPPORTED_TICK_RATES
            ),
            ConfigError::NonPositive(field) => write!(f, "{field} must be positive"),
            ConfigError::WorldTooNarrow {
                world_width,
                fighter_width,
            } => write!(
                f,
                "world_width {world_width} cannot fit a fighter of width {fighter_width}"
            ),
            ConfigError::ZeroWinsNeeded => write!(f, "wins_needed must be at least 1"),
            ConfigError::ZeroRoundTime => write!(f, "round_time must be at least 1 second"),
            ConfigError::CostExceedsCap { cost, max_energy } => write!(
                f,
                "ultimate_cost {cost} exceeds max_energy {max_energy}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl MatchConfig {
    /// Parse a TOML document. Missing keys fall back to the default arena.
    pub fn from_toml_str(s: &str) -> Result<MatchConfig, ConfigError> {
        let config: MatchConfig = toml::from_str(s).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<MatchConfig, ConfigError> {
        let txt = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        MatchConfig::from_toml_str(&txt)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_TICK_RATES.contains(&self.tick_rate) {
            return Err(ConfigError::UnsupportedTickRate(self.tick_rate));
        }
        let positive = [
            ("world_width", self.world_width),
            ("ground_y", self.ground_y),
            ("fighter_width", self.fighter_width),
            ("fighter_height", self.fighter_height),
            ("max_energy", self.max_energy),
        ];
        for (field, value) in positive {
            if value <= 0.0 || value.is_nan() {
                return Err(ConfigError::NonPositive(field));
            }
        }
        if self.world_width < self.fighter_width {
            return Err(ConfigError::WorldTooNarrow {
                world_width: self.world_width,
                fighter_width: self.fighter_width,
            });
        }
        if self.wins_needed == 0 {
            return Err(ConfigError::ZeroWinsNeeded);
        }
        if self.round_time == 0 {
            return Err(ConfigError::ZeroRoundTime);
        }
        if self.ultimate_cost > self.max_energy {
            return Err(ConfigError::CostExceedsCap {
                cost: self.ultimate_cost,
                max_energy: self.max_energy,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{arena_platforms, default_config};

    #[test]
    fn empty_document_gives_defaults() {
        let config = MatchConfig::from_toml_str("").expect("defaults are valid");
        assert_eq!(config.platforms, arena_platforms());
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn overrides_and_platforms_parse() {
        let doc = r#"
            seed = 9
            tick_rate = 120
            round_time = 45
            wins_needed = 3

            [[platforms]]
            x = 100.0
            y = 300.0
            width = 200.0
            height = 20.0
        "#;
        let config = MatchConfig::from_toml_str(doc).expect("valid config");
        assert_eq!(config.seed, 9);
        assert_eq!(config.tick_rate, 120);
        assert_eq!(config.round_time, 45);
        assert_eq!(config.wins_needed, 3);
        assert_eq!(config.platforms.len(), 1);
        assert_eq!(config.gravity, default_config(0).gravity);
    }

    #[test]
    fn rejects_unsupported_tick_rate() {
        let err = MatchConfig::from_toml_str("tick_rate = 75").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedTickRate(75)));
        assert!(err.to_string().contains("75"));
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = default_config(0);
        config.fighter_height = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive("fighter_height"))
        ));

        let mut config = default_config(0);
        config.world_width = 50.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WorldTooNarrow { .. })
        ));

        let mut config = default_config(0);
        config.wins_needed = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroWinsNeeded)));

        let mut config = default_config(0);
        config.round_time = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroRoundTime)));

        let mut config = default_config(0);
        config.ultimate_cost = 500.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CostExceedsCap { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = MatchConfig::from_toml_str("tick_rate = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = MatchConfig::load(Path::new("/nonexistent/arena.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
