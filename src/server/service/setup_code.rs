//! Setup code service for bootstrapping the first admin account.
//!
//! This module provides the `SetupCodeService` for generating and validating one-time-use
//! setup codes. When the application starts without any admin, a code is generated and a
//! registration link carrying it is logged. Registering with that code grants the `ADMIN`
//! role. Codes are stored in-memory with a 10-minute TTL and are invalidated after
//! successful use or expiration.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes.
pub const SETUP_CODE_TTL: Duration = Duration::from_secs(10 * 60);

/// Stored setup code with expiration timestamp.
#[derive(Clone)]
struct SetupCode {
    /// The verification code string.
    code: String,
    /// Timestamp when this code expires.
    expires_at: Instant,
}

impl SetupCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// A setup code taken out of the service by `claim`.
pub struct ClaimedSetupCode(SetupCode);

/// Service for managing the one-time setup code used to create the first admin.
///
/// Clones share the stored code, so the instance in `AppState` and the one used at
/// startup see the same state.
#[derive(Clone)]
pub struct SetupCodeService {
    /// The currently active setup code, if any.
    code: Arc<RwLock<Option<SetupCode>>>,
    ttl: Duration,
}

impl SetupCodeService {
    /// Creates a service with no active code and the default 10-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(SETUP_CODE_TTL)
    }

    /// Creates a service whose codes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random setup code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated 32-character alphanumeric code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        *self.code.write().await = Some(SetupCode::new(code_string.clone(), self.ttl));
        code_string
    }

    /// Validates the provided code against the stored setup code.
    ///
    /// A matching, unexpired code is consumed so it cannot be used twice. Expired codes
    /// are dropped when checked.
    ///
    /// # Returns
    /// - `true` - Code matched and was valid, it has been consumed
    /// - `false` - Code doesn't match, is expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        self.claim(input_code).await.is_some()
    }

    /// Removes a matching, unexpired code and hands it to the caller.
    ///
    /// The claim keeps the code's original expiry so it can be given back with
    /// `restore` when the work it was claimed for fails.
    pub async fn claim(&self, input_code: &str) -> Option<ClaimedSetupCode> {
        let mut code = self.code.write().await;

        let stored_code = code.as_ref()?;
        if stored_code.is_expired() {
            *code = None;
            return None;
        }
        if !stored_code.matches(input_code) {
            return None;
        }

        code.take().map(ClaimedSetupCode)
    }

    /// Puts a claimed code back while it is unexpired and no newer code was generated.
    pub async fn restore(&self, claimed: ClaimedSetupCode) {
        let mut code = self.code.write().await;

        if code.is_none() && !claimed.0.is_expired() {
            *code = Some(claimed.0);
        }
    }

    /// Checks if a setup code currently exists and has not expired.
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }

    /// Creates a 32-character string of ASCII letters and digits.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    /// Expected: 32-character code stored as valid
    #[tokio::test]
    async fn test_generate_code() {
        let service = SetupCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_valid_code().await);
    }

    /// Expected: correct code validates once and is consumed
    #[tokio::test]
    async fn test_code_cannot_be_reused() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    /// Expected: wrong code fails and keeps the stored code
    #[tokio::test]
    async fn test_validate_incorrect_code() {
        let service = SetupCodeService::new();
        service.generate().await;

        assert!(!service.validate_and_consume("wrong_code").await);
        assert!(service.has_valid_code().await);
    }

    #[tokio::test]
    async fn test_validate_without_code() {
        let service = SetupCodeService::new();
        assert!(!service.validate_and_consume("any_code").await);
    }

    /// Expected: clones observe the same consumed state
    #[tokio::test]
    async fn test_clones_share_code() {
        let service = SetupCodeService::new();
        let clone = service.clone();
        let code = service.generate().await;

        assert!(clone.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    /// Expected: code valid initially, rejected after the TTL passes
    #[tokio::test]
    async fn test_code_expires_after_ttl() {
        let service = SetupCodeService::with_ttl(Duration::from_millis(50));
        let code = service.generate().await;
        assert!(service.has_valid_code().await);

        sleep(Duration::from_millis(80)).await;

        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    /// Expected: a restored claim validates again, a wrong code claims nothing
    #[tokio::test]
    async fn test_restore_claimed_code() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.claim("wrong_code").await.is_none());

        let claimed = service.claim(&code).await.unwrap();
        assert!(!service.has_valid_code().await);

        service.restore(claimed).await;
        assert!(service.validate_and_consume(&code).await);
    }

    /// Expected: restoring never replaces a newer code
    #[tokio::test]
    async fn test_restore_keeps_newer_code() {
        let service = SetupCodeService::new();
        let old = service.generate().await;
        let claimed = service.claim(&old).await.unwrap();

        let newer = service.generate().await;
        service.restore(claimed).await;

        assert!(!service.validate_and_consume(&old).await);
        assert!(service.validate_and_consume(&newer).await);
    }
}
