use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Login attempt with an unknown email or a wrong password.
    ///
    /// Both cases share this variant so responses never reveal which accounts exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks the required role.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::AccessDenied(_, _) => StatusCode::FORBIDDEN,
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 with "Authentication required"
/// - `InvalidCredentials` → 401 with "Invalid email or password"
/// - `AccessDenied` → 403 with "Forbidden"
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = self.status_code();
        let message = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::AccessDenied(_, _) => "Forbidden",
        };

        error_response(status, message, None)
    }
}
