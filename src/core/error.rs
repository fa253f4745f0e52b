use thiserror::Error;

use crate::core::types::ResourceId;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Invalid combat state: {0}")]
    InvalidState(String),

    #[error("Unknown resource id: {id}")]
    UnknownResource { id: ResourceId },

    #[error("Resource {id} selected into {selected} slots but only {owned} owned")]
    InsufficientBalance {
        id: ResourceId,
        selected: u32,
        owned: u32,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PolicyError>;
