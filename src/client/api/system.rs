//! System API trait

use async_trait::async_trait;

use crate::client::models::SystemResources;
use crate::error::Result;

/// Host inspection operations for the MHFL API
#[async_trait]
pub trait SystemApi: Send + Sync {
    /// Fetch the backend host's CPU/memory/GPU usage snapshot.
    async fn system_resources(&self) -> Result<SystemResources>;
}
