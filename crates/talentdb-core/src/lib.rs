mod app_config;
mod config;
mod records;
mod talents;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{ProfileCandidate, ProfileRecord, CSV_HEADERS};
pub use talents::{Category, TalentRow, TALENT_COLUMNS, TALENT_STATUS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
