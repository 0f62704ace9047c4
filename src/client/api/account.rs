//! Account API trait
//!
//! Covers both the self-service operations (info, update, avatar) and the
//! admin operations (paged listing, create, delete).

use async_trait::async_trait;

use crate::client::models::{Account, CreateAccountRequest, UpdateAccountRequest};
use crate::client::pagination::{ListQuery, Page};
use crate::error::Result;

/// Account operations for the MHFL API
#[async_trait]
pub trait AccountApi: Send + Sync {
    // ========================================================================
    // Self-service Operations
    // ========================================================================

    /// Get the currently authenticated account.
    async fn account_info(&self) -> Result<Account>;

    /// Update the current account. Only the set fields are sent.
    async fn update_account(&self, request: UpdateAccountRequest) -> Result<()>;

    /// Upload an avatar image; returns the served avatar URL.
    async fn upload_avatar(&self, filename: &str, bytes: Vec<u8>) -> Result<String>;

    // ========================================================================
    // Admin Operations
    // ========================================================================

    /// Page through accounts with keyword and creation-time filters.
    async fn list_accounts(&self, query: &ListQuery) -> Result<Page<Account>>;

    /// Create an account with the backend's default password and role.
    async fn create_account(&self, request: CreateAccountRequest) -> Result<()>;

    /// Soft-delete an account.
    async fn delete_account(&self, id: u64) -> Result<()>;
}
