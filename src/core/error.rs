use thiserror::Error;

use crate::core::types::Tier;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("Tier not configured: {0}")]
    UnknownTier(Tier),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Unknown field in overrides: {0}")]
    UnknownField(String),

    #[error("Invalid value for field '{field}': expected {expected}")]
    InvalidFieldValue { field: String, expected: &'static str },

    #[error("Invalid stat profile: {0}")]
    InvalidProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
