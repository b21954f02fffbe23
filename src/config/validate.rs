// src/config/validate.rs

use axum::http::HeaderValue;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DagcheckError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DagcheckError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.server, raw.cors))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    // `[server].bind` is a typed SocketAddr and is checked during
    // deserialization.
    validate_allowed_origin(&cfg.cors.allowed_origin)?;
    Ok(())
}

fn validate_allowed_origin(origin: &str) -> Result<()> {
    if origin.trim().is_empty() {
        return Err(DagcheckError::ConfigError(
            "[cors].allowed_origin must not be empty".to_string(),
        ));
    }

    if origin == "*" {
        return Err(DagcheckError::ConfigError(
            "[cors].allowed_origin must name a single origin, not \"*\"".to_string(),
        ));
    }

    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(DagcheckError::ConfigError(format!(
            "[cors].allowed_origin '{origin}' must start with http:// or https://"
        )));
    }

    // Browsers send the Origin header without a path, so a trailing slash
    // would never match.
    if origin.ends_with('/') {
        return Err(DagcheckError::ConfigError(format!(
            "[cors].allowed_origin '{origin}' must not end with '/'"
        )));
    }

    HeaderValue::from_str(origin).map_err(|e| {
        DagcheckError::ConfigError(format!(
            "[cors].allowed_origin '{origin}' is not a valid header value: {e}"
        ))
    })?;

    Ok(())
}
