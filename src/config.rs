use bal::clock::{Clock, FixedClock, SystemClock};
use bal::Result;

use std::env;

use chrono::NaiveDate;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use thiserror::Error;

/// Log level used when nothing is configured
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

pub const LOG_LEVEL_VAR: &str = "BANK_LEDGER_LOG";
pub const TODAY_VAR: &str = "BANK_LEDGER_TODAY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level in {0}: {1:?}")]
    InvalidLogLevel(&'static str, String),

    #[error("Invalid date in {0}, expected YYYY-MM-DD: {1:?}")]
    InvalidDate(&'static str, String),
}

/// Settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LevelFilter,

    /// Pins the posting date instead of reading the system clock
    pub today: Option<NaiveDate>,
}

/// Clock selected by the configuration
#[derive(Debug, Clone, Copy)]
pub enum AppClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for AppClock {
    fn today(&self) -> NaiveDate {
        match self {
            Self::System(clock) => clock.today(),
            Self::Fixed(clock) => clock.today(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let log_level = match env::var(LOG_LEVEL_VAR) {
            Ok(level) => parse_log_level(&level)?,
            Err(_) => DEFAULT_LOG_LEVEL,
        };

        let today = match env::var(TODAY_VAR) {
            Ok(today) => Some(parse_today(&today)?),
            Err(_) => None,
        };

        return Ok(Self { log_level, today });
    }

    pub fn clock(&self) -> AppClock {
        match self.today {
            Some(today) => AppClock::Fixed(FixedClock(today)),
            None => AppClock::System(SystemClock),
        }
    }
}

pub fn configure_app() -> Result<AppConfig> {
    let config = AppConfig::from_env()?;

    SimpleLogger::new()
        .with_level(config.log_level)
        .env()
        .init()?;

    return Ok(config);
}

fn parse_log_level(level: &str) -> std::result::Result<LevelFilter, ConfigError> {
    level
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLogLevel(LOG_LEVEL_VAR, level.to_string()))
}

fn parse_today(today: &str) -> std::result::Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(today.trim(), "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidDate(TODAY_VAR, today.to_string()))
}
