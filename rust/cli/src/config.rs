use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_bankroll: u32,
    pub decks: usize,
    pub seed: Option<u64>,
    pub data_dir: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_bankroll: ValueSource,
    pub decks: ValueSource,
    pub seed: ValueSource,
    pub data_dir: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_bankroll: ValueSource::Default,
            decks: ValueSource::Default,
            seed: ValueSource::Default,
            data_dir: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_bankroll: felt_engine::seat::STARTING_BANKROLL,
            decks: felt_engine::shoe::DEFAULT_DECKS,
            seed: None,
            data_dir: "data".into(),
        }
    }
}

impl Config {
    /// Location of the session state file (achievements and leaderboard)
    /// under the configured data directory.
    pub fn state_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("felt.json")
    }
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
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FELT_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_bankroll {
            cfg.starting_bankroll = v;
            sources.starting_bankroll = ValueSource::File;
        }
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.data_dir {
            cfg.data_dir = v;
            sources.data_dir = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("FELT_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(bankroll) = std::env::var("FELT_STARTING_BANKROLL")
        && !bankroll.is_empty()
    {
        cfg.starting_bankroll = bankroll
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting_bankroll".into()))?;
        sources.starting_bankroll = ValueSource::Env;
    }
    if let Ok(decks) = std::env::var("FELT_DECKS")
        && !decks.is_empty()
    {
        cfg.decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?;
        sources.decks = ValueSource::Env;
    }
    if let Ok(dir) = std::env::var("FELT_DATA_DIR")
        && !dir.is_empty()
    {
        cfg.data_dir = dir;
        sources.data_dir = ValueSource::Env;
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
    starting_bankroll: Option<u32>,
    #[serde(default)]
    decks: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    data_dir: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_bankroll == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_bankroll must be >0".into(),
        ));
    }
    if cfg.decks == 0 || cfg.decks > 8 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: decks must be 1..=8".into(),
        ));
    }
    Ok(())
}
