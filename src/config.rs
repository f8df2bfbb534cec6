//! Runtime configuration and logging setup.
//!
//! Settings come from the environment (a `.env` file is loaded first);
//! command line flags override them in `main`.

use crate::output::OutputFormat;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub const ENV_FORMAT: &str = "CIDR_CALC_FORMAT";
pub const ENV_LOG_CONFIG: &str = "CIDR_CALC_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "CIDR_CALC_LOG_LEVEL";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    /// log4rs YAML file, used when it exists.
    pub log_config: String,
    /// Root level of the fallback stderr logger.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Table,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format
                .parse()
                .map_err(|e| format!("Invalid {ENV_FORMAT}: {e}"))?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level
                .trim()
                .parse()
                .map_err(|_| format!("Invalid {ENV_LOG_LEVEL}: '{level}'"))?;
        }
        Ok(config)
    }
}

/// Initialise log4rs from the YAML file, or a stderr logger when it is missing.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
        log::debug!("Logging configured from {}", config.log_config);
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.log_level))?;
    log4rs::init_config(log_config)?;
    log::debug!(
        "{} not found, logging to stderr at {}",
        config.log_config,
        config.log_level
    );
    Ok(())
}
