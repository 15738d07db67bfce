use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("couldn't serialize json")]
    Json(#[from] serde_json::Error),
    #[error("couldn't format html: {0}")]
    Format(String),
}
