use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::CONFIG_FILE_NAME;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub codec: CodecConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Timezone applied to floating date-times when a property has no TZID.
    #[serde(default)]
    pub default_tzid: Option<String>,
    /// Fold written content lines at 75 octets.
    pub fold_lines: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_tzid: None,
            fold_lines: true,
        }
    }
}

impl CodecConfig {
    /// ## Summary
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidSetting` if `default_tzid` is blank or padded.
    pub fn validate(&self) -> CoreResult<()> {
        match self.default_tzid.as_deref() {
            Some(tzid) if tzid.trim().is_empty() => Err(CoreError::InvalidSetting {
                key: "codec.default_tzid",
                reason: "must not be blank".to_string(),
            }),
            Some(tzid) if tzid.trim() != tzid => Err(CoreError::InvalidSetting {
                key: "codec.default_tzid",
                reason: format!("unexpected surrounding whitespace in {tzid:?}"),
            }),
            _ => Ok(()),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `kunai.toml`.
    /// Environment variables use the `KUNAI_` prefix and `__` between a section
    /// and its key, e.g. `KUNAI_CODEC__DEFAULT_TZID=Europe/Berlin`.
    /// Does not read `.env`; see [`load_config`].
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> CoreResult<Self> {
        Self::finish(
            Self::builder()?
                .add_source(
                    config::Environment::with_prefix("KUNAI")
                        .prefix_separator("_")
                        .separator("__")
                        .ignore_empty(true)
                        .try_parsing(true),
                )
                .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false)),
        )
    }

    /// ## Summary
    /// Loads configuration from TOML text on top of the defaults.
    ///
    /// ## Errors
    /// Returns an error if the TOML is malformed, does not deserialize or fails validation.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        Self::finish(
            Self::builder()?.add_source(config::File::from_str(toml, config::FileFormat::Toml)),
        )
    }

    fn builder() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder().set_default("codec.fold_lines", true)?)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> CoreResult<Self> {
        let settings = builder.build()?.try_deserialize::<Settings>()?;
        settings.codec.validate()?;
        Ok(settings)
    }
}

/// ## Summary
/// Loads a `.env` file from the working directory or one of its parents,
/// then settings from environment variables and `kunai.toml`.
///
/// ## Errors
/// Returns an error if a `.env` file exists but cannot be read, or if loading
/// or validating the settings fails.
pub fn load_config() -> CoreResult<Settings> {
    load_after_dotenv(dotenvy::dotenv())
}

/// ## Summary
/// Same as [`load_config`], reading the given `.env` file instead of searching
/// for one. A missing file is skipped.
///
/// ## Errors
/// Returns an error if the file exists but cannot be read, or if loading or
/// validating the settings fails.
pub fn load_config_from(env_file: &Path) -> CoreResult<Settings> {
    load_after_dotenv(dotenvy::from_path(env_file).map(|()| env_file.to_path_buf()))
}

fn load_after_dotenv(dotenv: dotenvy::Result<PathBuf>) -> CoreResult<Settings> {
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => return Err(e.into()),
    }

    let settings = Settings::load()?;
    tracing::debug!(
        default_tzid = ?settings.codec.default_tzid,
        fold_lines = settings.codec.fold_lines,
        "Loaded codec configuration"
    );
    Ok(settings)
}
