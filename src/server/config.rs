use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_UPLOAD_MAX_BYTES: usize = 5 * 1024 * 1024;
/// Minimum length of `SESSION_SECRET`, the size of a cookie signing key.
const MIN_SESSION_SECRET_BYTES: usize = 64;

pub struct Config {
    pub database_url: String,
    pub session_secret: String,
    pub app_url: String,

    pub upload_dir: String,
    pub upload_max_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_secret = required("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_BYTES {
            return Err(ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_SESSION_SECRET_BYTES),
            }
            .into());
        }

        let app_url = required("APP_URL")?;
        Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

        let upload_max_bytes = match std::env::var("UPLOAD_MAX_BYTES") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "UPLOAD_MAX_BYTES".to_string(),
                reason: format!("'{}' is not a byte count", value),
            })?,
            Err(_) => DEFAULT_UPLOAD_MAX_BYTES,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            session_secret,
            app_url: app_url.trim_end_matches('/').to_string(),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            upload_max_bytes,
        })
    }

    /// Whether the session cookie should carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.app_url.starts_with("https://")
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
