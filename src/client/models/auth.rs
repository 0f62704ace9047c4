//! Authentication wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizedUser {
    /// Account id
    pub id: u64,

    /// Account username
    pub username: String,

    /// Account role
    pub role: String,

    /// Issued bearer token
    pub token: String,

    /// Token expiration time
    pub expire: DateTime<Utc>,
}

/// Graphical captcha challenge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captcha {
    /// Challenge id, echoed back at login
    pub captcha_id: String,

    /// Base64-encoded PNG
    pub captcha_image: String,
}

/// Login request.
///
/// Sent form-urlencoded; `remember` only selects the credential scope and is
/// never put on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub captcha_id: String,
    pub captcha_code: String,
    #[serde(skip_serializing)]
    pub remember: bool,
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub telephone: String,
    /// Email verification code
    pub code: String,
}

/// First step of the password reset: prove ownership of the email
#[derive(Debug, Clone, Serialize)]
pub struct ResetConfirmRequest {
    pub email: String,
    pub code: String,
}

/// Second step of the password reset: set the new password
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub password: String,
}

/// What an emailed verification code is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CodePurpose {
    /// Account registration
    Register,
    /// Password reset
    Reset,
}

impl CodePurpose {
    /// Wire value for the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            CodePurpose::Register => "register",
            CodePurpose::Reset => "reset",
        }
    }
}
