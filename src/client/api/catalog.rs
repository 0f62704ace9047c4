//! Catalog API trait for algorithm and dataset administration
//!
//! Both resources share the same CRUD shape: paged keyword/time-window
//! listing, create and rename via query parameters, soft delete by id.

use async_trait::async_trait;

use crate::client::models::{Algorithm, Dataset};
use crate::client::pagination::{ListQuery, Page};
use crate::error::Result;

/// Algorithm and dataset administration for the MHFL API
#[async_trait]
pub trait CatalogApi: Send + Sync {
    // ========================================================================
    // Algorithms
    // ========================================================================

    /// Page through registered algorithms.
    async fn list_algorithms(&self, query: &ListQuery) -> Result<Page<Algorithm>>;

    /// Register a new algorithm.
    async fn create_algorithm(&self, name: &str) -> Result<()>;

    /// Rename an algorithm.
    async fn update_algorithm(&self, id: u64, name: &str) -> Result<()>;

    /// Soft-delete an algorithm.
    async fn delete_algorithm(&self, id: u64) -> Result<()>;

    // ========================================================================
    // Datasets
    // ========================================================================

    /// Page through registered datasets.
    async fn list_datasets(&self, query: &ListQuery) -> Result<Page<Dataset>>;

    /// Register a new dataset.
    async fn create_dataset(&self, name: &str) -> Result<()>;

    /// Rename a dataset.
    async fn update_dataset(&self, id: u64, name: &str) -> Result<()>;

    /// Soft-delete a dataset.
    async fn delete_dataset(&self, id: u64) -> Result<()>;
}
