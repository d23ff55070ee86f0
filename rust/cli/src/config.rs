//! Table configuration: defaults, an optional TOML file and environment overrides.
//!
//! Resolution order is default, then the file named by `ELEMENTAL_CONFIG`, then
//! `ELEMENTAL_*` variables. Each field remembers where its value came from so
//! `cfg` can show it. Command-line flags such as `--seed` override on top.

use elemental_engine::game::{OddChipRule, TableConfig, MAX_SEATS};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "ELEMENTAL_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seats: u32,
    pub seed: Option<u64>,
    pub side_pots: bool,
    pub odd_chip: OddChipRule,
    pub ai: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: 1000,
            small_blind: 5,
            big_blind: 10,
            seats: 4,
            seed: None,
            side_pots: true,
            odd_chip: OddChipRule::Discard,
            ai: "baseline".into(),
        }
    }
}

impl Config {
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            side_pots: self.side_pots,
            odd_chip: self.odd_chip,
            ..TableConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seats: ValueSource,
    pub seed: ValueSource,
    pub side_pots: ValueSource,
    pub odd_chip: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seats: ValueSource::Default,
            seed: ValueSource::Default,
            side_pots: ValueSource::Default,
            odd_chip: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.side_pots {
            cfg.side_pots = v;
            sources.side_pots = ValueSource::File;
        }
        if let Some(v) = f.odd_chip {
            cfg.odd_chip = v;
            sources.odd_chip = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(v) = env_value("ELEMENTAL_STACK") {
        cfg.starting_stack = parse_num(&v, "starting stack")?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_value("ELEMENTAL_SMALL_BLIND") {
        cfg.small_blind = parse_num(&v, "small blind")?;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_value("ELEMENTAL_BIG_BLIND") {
        cfg.big_blind = parse_num(&v, "big blind")?;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_value("ELEMENTAL_SEATS") {
        cfg.seats = parse_num(&v, "seats")?;
        sources.seats = ValueSource::Env;
    }
    if let Some(v) = env_value("ELEMENTAL_SEED") {
        cfg.seed = Some(
            v.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("ELEMENTAL_SIDE_POTS") {
        cfg.side_pots =
            parse_bool(&v).ok_or_else(|| ConfigError::Invalid("Invalid side_pots".into()))?;
        sources.side_pots = ValueSource::Env;
    }
    if let Some(v) = env_value("ELEMENTAL_ODD_CHIP") {
        cfg.odd_chip = parse_odd_chip(&v)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid odd_chip rule: {}", v)))?;
        sources.odd_chip = ValueSource::Env;
    }
    if let Some(v) = env_value("ELEMENTAL_AI") {
        cfg.ai = v;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seats: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    side_pots: Option<bool>,
    #[serde(default)]
    odd_chip: Option<OddChipRule>,
    #[serde(default)]
    ai: Option<String>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_num(v: &str, what: &str) -> Result<u32, ConfigError> {
    v.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", what, v)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.big_blind == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: big_blind must be >0".into(),
        ));
    }
    if cfg.small_blind > cfg.big_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: small_blind must be <= big_blind".into(),
        ));
    }
    if cfg.seats < 2 || cfg.seats as usize > MAX_SEATS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: seats must be between 2 and {}",
            MAX_SEATS
        )));
    }
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if elemental_ai::create_ai(&cfg.ai).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of {})",
            cfg.ai,
            elemental_ai::AI_NAMES.join(", ")
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn parse_odd_chip(s: &str) -> Option<OddChipRule> {
    match s.trim().to_ascii_lowercase().as_str() {
        "discard" => Some(OddChipRule::Discard),
        "first-after-dealer" | "first_after_dealer" => Some(OddChipRule::FirstAfterDealer),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(validate(&cfg).is_ok());
        let table = cfg.table_config();
        assert_eq!((table.small_blind, table.big_blind), (5, 10));
        assert!(table.side_pots);
    }

    #[test]
    fn validation_rejects_bad_tables() {
        let cases = [
            Config {
                big_blind: 0,
                small_blind: 0,
                ..Config::default()
            },
            Config {
                small_blind: 20,
                ..Config::default()
            },
            Config {
                seats: 1,
                ..Config::default()
            },
            Config {
                seats: 5,
                ..Config::default()
            },
            Config {
                starting_stack: 0,
                ..Config::default()
            },
            Config {
                ai: "oracle".into(),
                ..Config::default()
            },
        ];
        for cfg in cases {
            assert!(validate(&cfg).is_err(), "{:?} should be rejected", cfg);
        }
    }

    #[test]
    fn odd_chip_spellings() {
        assert_eq!(parse_odd_chip("Discard"), Some(OddChipRule::Discard));
        assert_eq!(
            parse_odd_chip("first-after-dealer"),
            Some(OddChipRule::FirstAfterDealer)
        );
        assert_eq!(
            parse_odd_chip("first_after_dealer"),
            Some(OddChipRule::FirstAfterDealer)
        );
        assert_eq!(parse_odd_chip("split"), None);
    }

    #[test]
    fn file_config_reads_kebab_case_rule() {
        let f: FileConfig =
            toml::from_str("seats = 3\nodd_chip = \"first-after-dealer\"\nside_pots = false\n")
                .unwrap();
        assert_eq!(f.seats, Some(3));
        assert_eq!(f.odd_chip, Some(OddChipRule::FirstAfterDealer));
        assert_eq!(f.side_pots, Some(false));
        assert!(f.starting_stack.is_none());
    }
}
