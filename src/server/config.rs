use std::{path::PathBuf, str::FromStr};

use crate::server::{error::config::ConfigError, model::app::UploadSettings};

/// Default amount of concurrent background workers
pub const DEFAULT_WORKERS: usize = 4;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub upload_dir: PathBuf,
    pub workers: usize,
    pub upload_slot_ttl_secs: i64,
    pub max_upload_bytes: i64,
    /// Seeds one account per role plus sample admin records on startup
    pub demo_mode: bool,
}

impl Config {
    /// Reads configuration from environment variables
    ///
    /// `DATABASE_URL`, `VALKEY_URL` and `UPLOAD_DIR` are required, everything else falls back to
    /// a default when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            upload_dir: PathBuf::from(required("UPLOAD_DIR")?),
            workers: optional("WORKERS", DEFAULT_WORKERS)?,
            upload_slot_ttl_secs: optional(
                "UPLOAD_SLOT_TTL_SECS",
                UploadSettings::DEFAULT_SLOT_TTL_SECS,
            )?,
            max_upload_bytes: optional("MAX_UPLOAD_BYTES", UploadSettings::DEFAULT_MAX_BYTES)?,
            demo_mode: optional("DEMO_MODE", false)?,
        })
    }

    pub fn upload_settings(&self) -> UploadSettings {
        UploadSettings {
            root: self.upload_dir.clone(),
            slot_ttl: chrono::Duration::seconds(self.upload_slot_ttl_secs),
            max_bytes: self.max_upload_bytes,
        }
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_variable_uses_default() {
        let value: usize = optional("PITCHPASS_TEST_UNSET_WORKERS", 7).unwrap();

        assert_eq!(value, 7);
    }

    #[test]
    fn missing_required_variable_names_it() {
        let result = required("PITCHPASS_TEST_UNSET_DATABASE_URL");

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar(var)) if var == "PITCHPASS_TEST_UNSET_DATABASE_URL"
        ));
    }
}
