use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash or parse a password hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Failure to build a URL from the configured base URL.
    #[error("Failed to build URL from '{value}': {source}")]
    InvalidUrl {
        /// The base or path that failed to join
        value: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}
