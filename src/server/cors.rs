// src/server/cors.rs

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsSection;
use crate::errors::{DagcheckError, Result};

/// Build the CORS layer for the single configured origin.
///
/// Methods and request headers are mirrored from the preflight instead of
/// using `*`, since a wildcard is not allowed together with credentials.
pub fn cors_layer(cors: &CorsSection) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(&cors.allowed_origin).map_err(|e| {
        DagcheckError::ConfigError(format!(
            "invalid allowed origin '{}': {e}",
            cors.allowed_origin
        ))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cors.allow_credentials))
}
