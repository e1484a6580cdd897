//! Configuration module

use std::env;
use std::path::PathBuf;

/// Default location of the training dataset
pub const DEFAULT_DATA_PATH: &str = "data/student_exam_scores.csv";

/// Default seed for the synthetic stress feature
pub const DEFAULT_STRESS_SEED: u64 = 42;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Training dataset (CSV)
    pub data_path: PathBuf,

    /// Seed for the keyed stress-risk draw
    pub stress_seed: u64,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),

            stress_seed: env::var("STRESS_SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_STRESS_SEED),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// `host:port` string used for binding and the startup banner
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            stress_seed: DEFAULT_STRESS_SEED,
            environment: "development".to_string(),
        }
    }
}
