//! Mock MHFL API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AccountApi, AuthApi, CatalogApi, SystemApi};
use super::models::{
    Account, Algorithm, AuthorizedUser, Captcha, CodePurpose, CreateAccountRequest, Dataset,
    LoginRequest, RegisterRequest, ResetConfirmRequest, ResetPasswordRequest, SystemResources,
    UpdateAccountRequest,
};
use super::pagination::{ListQuery, Page};
use crate::error::{Failure, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
pub struct MockMhflClient {
    /// Accounts to page through in list_accounts
    accounts: Arc<Mutex<Vec<Account>>>,
    /// Algorithms to page through in list_algorithms
    algorithms: Arc<Mutex<Vec<Algorithm>>>,
    /// Datasets to page through in list_datasets
    datasets: Arc<Mutex<Vec<Dataset>>>,
    /// Resource snapshot for system_resources
    resources: Arc<Mutex<Option<SystemResources>>>,
    /// User returned from login
    user: Arc<Mutex<Option<AuthorizedUser>>>,
    /// Failure to return (if any) - consumed on first use
    failure: Arc<Mutex<Option<Failure>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

impl Default for MockMhflClient {
    fn default() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(Vec::new())),
            algorithms: Arc::new(Mutex::new(Vec::new())),
            datasets: Arc::new(Mutex::new(Vec::new())),
            resources: Arc::new(Mutex::new(None)),
            user: Arc::new(Mutex::new(None)),
            failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub captcha: usize,
    pub ask_code: usize,
    pub login: usize,
    pub logout: usize,
    pub register: usize,
    pub confirm_reset: usize,
    pub reset_password: usize,
    pub account_info: usize,
    pub update_account: usize,
    pub upload_avatar: usize,
    pub list_accounts: usize,
    pub create_account: usize,
    pub delete_account: usize,
    pub list_algorithms: usize,
    pub create_algorithm: usize,
    pub update_algorithm: usize,
    pub delete_algorithm: usize,
    pub list_datasets: usize,
    pub create_dataset: usize,
    pub update_dataset: usize,
    pub delete_dataset: usize,
    pub system_resources: usize,
}

/// Build a one-page [`Page`] over the full item set, honoring the query's
/// `size`/`current` if set.
fn paged<T: Clone>(items: &[T], query: &ListQuery) -> Page<T> {
    let size = query.size.unwrap_or(10).max(1);
    let current = query.current.unwrap_or(1).max(1);
    let total = items.len() as u64;
    let pages = total.div_ceil(size);

    let start = ((current - 1) * size) as usize;
    let records = items
        .iter()
        .skip(start)
        .take(size as usize)
        .cloned()
        .collect();

    Page {
        records,
        total,
        size,
        current,
        pages,
    }
}

impl MockMhflClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure accounts to page through in list_accounts.
    pub async fn with_accounts(self, accounts: Vec<Account>) -> Self {
        *self.accounts.lock().await = accounts;
        self
    }

    /// Configure algorithms to page through in list_algorithms.
    pub async fn with_algorithms(self, algorithms: Vec<Algorithm>) -> Self {
        *self.algorithms.lock().await = algorithms;
        self
    }

    /// Configure datasets to page through in list_datasets.
    pub async fn with_datasets(self, datasets: Vec<Dataset>) -> Self {
        *self.datasets.lock().await = datasets;
        self
    }

    /// Configure the resource snapshot for system_resources.
    pub async fn with_resources(self, resources: SystemResources) -> Self {
        *self.resources.lock().await = Some(resources);
        self
    }

    /// Configure the user returned from login.
    pub async fn with_user(self, user: AuthorizedUser) -> Self {
        *self.user.lock().await = Some(user);
        self
    }

    /// Configure a failure to return on the next API call.
    /// The failure is consumed after one use.
    pub async fn with_failure(self, failure: Failure) -> Self {
        *self.failure.lock().await = Some(failure);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Check if there's a pending failure and consume it.
    async fn check_failure(&self) -> Result<()> {
        let mut failure = self.failure.lock().await;
        if let Some(f) = failure.take() {
            return Err(f.into());
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for MockMhflClient {
    async fn captcha(&self) -> Result<Captcha> {
        self.check_failure().await?;
        self.call_count.lock().await.captcha += 1;

        Ok(Captcha {
            captcha_id: "mock-captcha".to_string(),
            captcha_image: String::new(),
        })
    }

    async fn ask_code(&self, _email: &str, _purpose: CodePurpose) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.ask_code += 1;
        Ok(())
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthorizedUser> {
        self.check_failure().await?;
        self.call_count.lock().await.login += 1;

        let user = self.user.lock().await;
        Ok(user.clone().unwrap_or_else(|| AuthorizedUser {
            id: 1,
            username: request.username,
            role: "user".to_string(),
            token: "mock-token".to_string(),
            expire: chrono::Utc::now() + chrono::Duration::hours(1),
        }))
    }

    async fn logout(&self) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.logout += 1;
        Ok(())
    }

    async fn register(&self, _request: RegisterRequest) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.register += 1;
        Ok(())
    }

    async fn confirm_reset(&self, _request: ResetConfirmRequest) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.confirm_reset += 1;
        Ok(())
    }

    async fn reset_password(&self, _request: ResetPasswordRequest) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.reset_password += 1;
        Ok(())
    }
}

#[async_trait]
impl AccountApi for MockMhflClient {
    async fn account_info(&self) -> Result<Account> {
        self.check_failure().await?;
        self.call_count.lock().await.account_info += 1;

        let accounts = self.accounts.lock().await;
        accounts
            .first()
            .cloned()
            .ok_or_else(|| Failure::application("account not found", 404, "/api/account/info").into())
    }

    async fn update_account(&self, _request: UpdateAccountRequest) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.update_account += 1;
        Ok(())
    }

    async fn upload_avatar(&self, filename: &str, _bytes: Vec<u8>) -> Result<String> {
        self.check_failure().await?;
        self.call_count.lock().await.upload_avatar += 1;
        Ok(format!("/static/avatar/{}", filename))
    }

    async fn list_accounts(&self, query: &ListQuery) -> Result<Page<Account>> {
        self.check_failure().await?;
        self.call_count.lock().await.list_accounts += 1;

        Ok(paged(&self.accounts.lock().await, query))
    }

    async fn create_account(&self, request: CreateAccountRequest) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.create_account += 1;

        let mut accounts = self.accounts.lock().await;
        let id = accounts.len() as u64 + 1;
        accounts.push(Account {
            id,
            username: request.username,
            gender: Default::default(),
            email: request.email,
            telephone: request.telephone,
            avatar: None,
            role: "user".to_string(),
            birthday: None,
            age: None,
            create_time: "2026-01-01 00:00:00".to_string(),
            update_time: "2026-01-01 00:00:00".to_string(),
        });
        Ok(())
    }

    async fn delete_account(&self, id: u64) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.delete_account += 1;

        let mut accounts = self.accounts.lock().await;
        let before = accounts.len();
        accounts.retain(|a| a.id != id);
        if accounts.len() == before {
            let url = format!("/api/account/admin/{}", id);
            return Err(Failure::application("account not found", 404, url).into());
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for MockMhflClient {
    async fn list_algorithms(&self, query: &ListQuery) -> Result<Page<Algorithm>> {
        self.check_failure().await?;
        self.call_count.lock().await.list_algorithms += 1;

        Ok(paged(&self.algorithms.lock().await, query))
    }

    async fn create_algorithm(&self, name: &str) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.create_algorithm += 1;

        let mut algorithms = self.algorithms.lock().await;
        let id = algorithms.len() as u64 + 1;
        algorithms.push(Algorithm {
            id,
            algorithm_name: name.to_string(),
            create_time: "2026-01-01 00:00:00".to_string(),
            update_time: "2026-01-01 00:00:00".to_string(),
        });
        Ok(())
    }

    async fn update_algorithm(&self, id: u64, name: &str) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.update_algorithm += 1;

        let mut algorithms = self.algorithms.lock().await;
        match algorithms.iter_mut().find(|a| a.id == id) {
            Some(algorithm) => {
                algorithm.algorithm_name = name.to_string();
                Ok(())
            }
            None => {
                let url = format!("/api/algorithm/admin/{}", id);
                Err(Failure::application("algorithm not found", 404, url).into())
            }
        }
    }

    async fn delete_algorithm(&self, id: u64) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.delete_algorithm += 1;

        let mut algorithms = self.algorithms.lock().await;
        let before = algorithms.len();
        algorithms.retain(|a| a.id != id);
        if algorithms.len() == before {
            let url = format!("/api/algorithm/admin/{}", id);
            return Err(Failure::application("algorithm not found", 404, url).into());
        }
        Ok(())
    }

    async fn list_datasets(&self, query: &ListQuery) -> Result<Page<Dataset>> {
        self.check_failure().await?;
        self.call_count.lock().await.list_datasets += 1;

        Ok(paged(&self.datasets.lock().await, query))
    }

    async fn create_dataset(&self, name: &str) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.create_dataset += 1;

        let mut datasets = self.datasets.lock().await;
        let id = datasets.len() as u64 + 1;
        datasets.push(Dataset {
            id,
            data_name: name.to_string(),
            create_time: "2026-01-01 00:00:00".to_string(),
            update_time: "2026-01-01 00:00:00".to_string(),
        });
        Ok(())
    }

    async fn update_dataset(&self, id: u64, name: &str) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.update_dataset += 1;

        let mut datasets = self.datasets.lock().await;
        match datasets.iter_mut().find(|d| d.id == id) {
            Some(dataset) => {
                dataset.data_name = name.to_string();
                Ok(())
            }
            None => {
                let url = format!("/api/dataset/admin/{}", id);
                Err(Failure::application("dataset not found", 404, url).into())
            }
        }
    }

    async fn delete_dataset(&self, id: u64) -> Result<()> {
        self.check_failure().await?;
        self.call_count.lock().await.delete_dataset += 1;

        let mut datasets = self.datasets.lock().await;
        let before = datasets.len();
        datasets.retain(|d| d.id != id);
        if datasets.len() == before {
            let url = format!("/api/dataset/admin/{}", id);
            return Err(Failure::application("dataset not found", 404, url).into());
        }
        Ok(())
    }
}

#[async_trait]
impl SystemApi for MockMhflClient {
    async fn system_resources(&self) -> Result<SystemResources> {
        self.check_failure().await?;
        self.call_count.lock().await.system_resources += 1;

        let resources = self.resources.lock().await;
        resources.clone().ok_or_else(|| {
            Failure::application("resources unavailable", 500, "/api/system/resources").into()
        })
    }
}
