//! Aiven Authentication
//!
//! Credentials and the wire shapes of the `userauth` exchange.

use super::envelope::{nullable, ApiError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The whole authentication exchange must finish within this bound,
/// independent of any per-call timeout configured later.
pub const AUTH_TIMEOUT: Duration = Duration::from_secs(8);

pub const ENV_EMAIL: &str = "AIVEN_EMAIL";
pub const ENV_PASSWORD: &str = "AIVEN_PASSWORD";
pub const ENV_OTP: &str = "AIVEN_OTP";

/// User credentials for the Aiven console
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// One time password; empty when the account has no second factor
    pub otp: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            otp: String::new(),
        }
    }

    pub fn with_otp(mut self, otp: &str) -> Self {
        self.otp = otp.to_string();
        self
    }

    /// Read credentials from `AIVEN_EMAIL`, `AIVEN_PASSWORD` and `AIVEN_OTP`.
    /// Unset variables are read as empty strings.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            email: var(ENV_EMAIL),
            password: var(ENV_PASSWORD),
            otp: var(ENV_OTP),
        }
    }

    pub(crate) fn as_request(&self) -> UserAuthRequest<'_> {
        UserAuthRequest {
            email: &self.email,
            password: &self.password,
            otp: &self.otp,
        }
    }
}

// Security: never print secrets
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("otp", &if self.otp.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

/// Body of `POST /userauth`. The otp is always sent, even when empty.
#[derive(Debug, Serialize)]
pub(crate) struct UserAuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub otp: &'a str,
}

/// Response of `POST /userauth`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserAuthResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub errors: Vec<ApiError>,
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable")]
    pub state: String,
    #[serde(default, deserialize_with = "nullable")]
    pub token: String,
}
