use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub observer: ObserverConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct ObserverConfig {
    #[serde(default = "default_observer_x")]
    pub x: i32,
    #[serde(default = "default_observer_y")]
    pub y: i32,
}

#[derive(Debug, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_board_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_cast_log")]
    pub enable_cast_log: bool,
    #[serde(default = "default_cast_log_path")]
    pub cast_log_path: String,
}

// Default values
fn default_observer_x() -> i32 { 3 }
fn default_observer_y() -> i32 { 5 }
fn default_board_path() -> String { "boards/default_board.txt".to_string() }
fn default_enable_cast_log() -> bool { true }
fn default_cast_log_path() -> String { "cast_log.json".to_string() }

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            x: default_observer_x(),
            y: default_observer_y(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            path: default_board_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_cast_log: default_enable_cast_log(),
            cast_log_path: default_cast_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            observer: ObserverConfig::default(),
            board: BoardConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from config.toml");
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
