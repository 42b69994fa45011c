use thiserror::Error;

/// Errors raised while loading or checking codec settings.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Environment file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Invalid setting `{key}`: {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
