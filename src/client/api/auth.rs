//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{
    AuthorizedUser, Captcha, CodePurpose, LoginRequest, RegisterRequest, ResetConfirmRequest,
    ResetPasswordRequest,
};
use crate::error::Result;

/// Authentication operations for the MHFL API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Fetch a graphical captcha challenge for the login form.
    async fn captcha(&self) -> Result<Captcha>;

    /// Request an email verification code for registration or reset.
    async fn ask_code(&self, email: &str, purpose: CodePurpose) -> Result<()>;

    /// Log in with credentials and a solved captcha.
    ///
    /// On success the returned credential record is persisted in the scope
    /// selected by `request.remember` (the other scope is cleared first, so
    /// at most one record exists) and a welcome notice is emitted.
    async fn login(&self, request: LoginRequest) -> Result<AuthorizedUser>;

    /// Log out on the server, then evict local credentials.
    ///
    /// Eviction happens only after the server acknowledges: a failed logout
    /// leaves the local record in place.
    async fn logout(&self) -> Result<()>;

    /// Register a new account.
    async fn register(&self, request: RegisterRequest) -> Result<()>;

    /// Verify an emailed reset code before setting a new password.
    async fn confirm_reset(&self, request: ResetConfirmRequest) -> Result<()>;

    /// Set a new password after a confirmed reset.
    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<()>;
}
