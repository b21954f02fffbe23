// src/config/model.rs

use std::net::SocketAddr;

use serde::Deserialize;

/// Configuration exactly as read from a TOML file, before validation.
///
/// ```toml
/// [server]
/// bind = "127.0.0.1:8000"
///
/// [cors]
/// allowed_origin = "http://localhost:3000"
/// allow_credentials = true
/// ```
///
/// Every section is optional; missing values fall back to the defaults above.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub cors: CorsSection,
}

/// Validated configuration. Only obtainable through
/// `ConfigFile::try_from(RawConfigFile)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub server: ServerSection,
    pub cors: CorsSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(server: ServerSection, cors: CorsSection) -> Self {
        Self { server, cors }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// `[cors]` section.
///
/// Exactly one origin is allowed. Methods and request headers are always
/// permitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSection {
    /// Origin allowed to call the API, e.g. `http://localhost:3000`.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_allow_credentials() -> bool {
    true
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
            allow_credentials: default_allow_credentials(),
        }
    }
}
