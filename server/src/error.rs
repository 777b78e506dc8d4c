//! Startup errors.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("site directory {0} does not exist; build the client with `trunk build` first")]
    MissingSite(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
