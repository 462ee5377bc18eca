/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub hardware: HardwareConfig,
}

/**
 * Settings for the elevator controller.
 *
 * All durations are given in milliseconds.
 */
#[derive(Deserialize, Clone, Debug)]
pub struct ElevatorConfig {
    pub n_floors: u8,
    #[serde(default = "default_door_open_time")]
    pub door_open_time: u64,
    #[serde(default = "default_tick_period")]
    pub tick_period: u64,
    #[serde(default = "default_stop_release_ticks")]
    pub stop_release_ticks: u32,
    #[serde(default)]
    pub motor_timeout: Option<u64>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct HardwareConfig {
    pub driver_address: String,
    pub driver_port: u16,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_door_open_time() -> u64 {
    3000
}

fn default_tick_period() -> u64 {
    10
}

fn default_stop_release_ticks() -> u32 {
    3
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let elevator = &self.elevator;
        if elevator.n_floors < 2 {
            return Err(ConfigError::Invalid(format!(
                "n_floors must be at least 2, got {}",
                elevator.n_floors
            )));
        }
        if elevator.door_open_time == 0 {
            return Err(ConfigError::Invalid("door_open_time must be positive".into()));
        }
        if elevator.tick_period == 0 {
            return Err(ConfigError::Invalid("tick_period must be positive".into()));
        }
        if elevator.stop_release_ticks == 0 {
            return Err(ConfigError::Invalid("stop_release_ticks must be at least 1".into()));
        }
        if elevator.motor_timeout == Some(0) {
            return Err(ConfigError::Invalid("motor_timeout must be positive when set".into()));
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
