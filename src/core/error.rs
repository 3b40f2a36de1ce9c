use thiserror::Error;

#[derive(Error, Debug)]
pub enum CycleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid time {0:?} (expected \"H:MM AM|PM\" or \"HH:MM\")")]
    InvalidTime(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CycleError>;
