//! MHFL API client implementation

use std::sync::Arc;

use async_trait::async_trait;

use super::api::{AccountApi, AuthApi, CatalogApi, SystemApi};
use super::http::Dispatcher;
use super::models::{
    Account, Algorithm, AuthorizedUser, Captcha, CodePurpose, CreateAccountRequest, Dataset,
    LoginRequest, RegisterRequest, ResetConfirmRequest, ResetPasswordRequest, SystemResources,
    UpdateAccountRequest,
};
use super::pagination::{ListQuery, Page};
use crate::credentials::{Credential, CredentialStore, Scope};
use crate::error::Result;
use crate::notify::Notifier;

/// MHFL API client
///
/// Owns the request dispatcher and the credential store; the store is shared
/// with the dispatcher, which consults it for the bearer token on every call.
pub struct MhflClient {
    dispatcher: Dispatcher,
    store: Arc<CredentialStore>,
    notifier: Notifier,
}

impl MhflClient {
    /// Create a client with the default credential locations and stderr
    /// notices.
    pub fn new() -> Result<Self> {
        let notifier = Notifier::stderr();
        let store = Arc::new(CredentialStore::open()?.with_notifier(notifier.clone()));
        Self::with_store(store, notifier)
    }

    /// Create a client over a specific store and notice sink (for testing).
    pub fn with_store(store: Arc<CredentialStore>, notifier: Notifier) -> Result<Self> {
        let dispatcher = Dispatcher::new(store.clone(), notifier.clone())?;
        Ok(Self {
            dispatcher,
            store,
            notifier,
        })
    }

    /// The credential store backing this client.
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }
}

/// The credential record persisted for an authorized user
fn credential_record(user: &AuthorizedUser) -> Credential {
    Credential {
        token: user.token.clone(),
        expire: user.expire,
        username: user.username.clone(),
        id: user.id,
    }
}

#[async_trait]
impl AuthApi for MhflClient {
    async fn captcha(&self) -> Result<Captcha> {
        Ok(self.dispatcher.get("/captcha/generate").await?)
    }

    async fn ask_code(&self, email: &str, purpose: CodePurpose) -> Result<()> {
        self.dispatcher
            .get_query::<()>(
                "/auth/ask-code",
                &[
                    ("email", email.to_string()),
                    ("type", purpose.as_str().to_string()),
                ],
            )
            .await?;
        self.notifier
            .success("Verification code sent, please check your inbox");
        Ok(())
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthorizedUser> {
        let remember = request.remember;
        let user: AuthorizedUser = self
            .dispatcher
            .post_urlencoded("/auth/login", &request)
            .await?;

        // One valid record at a time: drop whatever either scope held before
        // persisting the fresh one.
        let scope = if remember {
            Scope::Remembered
        } else {
            Scope::Session
        };
        self.store.clear();
        self.store.store(scope, &credential_record(&user))?;

        self.notifier
            .success(format!("Welcome back, {}", user.username));
        Ok(user)
    }

    async fn logout(&self) -> Result<()> {
        self.dispatcher.get::<()>("/auth/logout").await?;

        // Evict only after the server acknowledged the logout
        self.store.clear();
        self.notifier.success("Signed out, see you next time");
        Ok(())
    }

    async fn register(&self, request: RegisterRequest) -> Result<()> {
        self.dispatcher
            .post::<(), _>("/auth/register", &request)
            .await?;
        self.notifier.success("Registered, please sign in");
        Ok(())
    }

    async fn confirm_reset(&self, request: ResetConfirmRequest) -> Result<()> {
        Ok(self
            .dispatcher
            .post::<(), _>("/auth/reset-confirm", &request)
            .await?)
    }

    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<()> {
        self.dispatcher
            .post::<(), _>("/auth/reset-password", &request)
            .await?;
        self.notifier
            .success("Password reset, sign in with your new password");
        Ok(())
    }
}

#[async_trait]
impl AccountApi for MhflClient {
    async fn account_info(&self) -> Result<Account> {
        Ok(self.dispatcher.get("/api/account/info").await?)
    }

    async fn update_account(&self, request: UpdateAccountRequest) -> Result<()> {
        Ok(self
            .dispatcher
            .put::<(), _>("/api/account/update", &request)
            .await?)
    }

    async fn upload_avatar(&self, filename: &str, bytes: Vec<u8>) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        Ok(self
            .dispatcher
            .post_form("/api/file/avatar/upload", form)
            .await?)
    }

    async fn list_accounts(&self, query: &ListQuery) -> Result<Page<Account>> {
        Ok(self
            .dispatcher
            .get_query("/api/account/admin/list", &query.to_query_params())
            .await?)
    }

    async fn create_account(&self, request: CreateAccountRequest) -> Result<()> {
        Ok(self
            .dispatcher
            .post::<(), _>("/api/account/admin/create", &request)
            .await?)
    }

    async fn delete_account(&self, id: u64) -> Result<()> {
        Ok(self
            .dispatcher
            .delete::<()>(&format!("/api/account/admin/{}", id))
            .await?)
    }
}

#[async_trait]
impl CatalogApi for MhflClient {
    async fn list_algorithms(&self, query: &ListQuery) -> Result<Page<Algorithm>> {
        Ok(self
            .dispatcher
            .get_query("/api/algorithm/admin/list", &query.to_query_params())
            .await?)
    }

    async fn create_algorithm(&self, name: &str) -> Result<()> {
        Ok(self
            .dispatcher
            .post_query::<()>(
                "/api/algorithm/admin/create",
                &[("algorithmName", name.to_string())],
            )
            .await?)
    }

    async fn update_algorithm(&self, id: u64, name: &str) -> Result<()> {
        Ok(self
            .dispatcher
            .put_query::<()>(
                &format!("/api/algorithm/admin/{}", id),
                &[("algorithmName", name.to_string())],
            )
            .await?)
    }

    async fn delete_algorithm(&self, id: u64) -> Result<()> {
        Ok(self
            .dispatcher
            .delete::<()>(&format!("/api/algorithm/admin/{}", id))
            .await?)
    }

    async fn list_datasets(&self, query: &ListQuery) -> Result<Page<Dataset>> {
        Ok(self
            .dispatcher
            .get_query("/api/dataset/admin/list", &query.to_query_params())
            .await?)
    }

    async fn create_dataset(&self, name: &str) -> Result<()> {
        Ok(self
            .dispatcher
            .post_query::<()>(
                "/api/dataset/admin/create",
                &[("dataName", name.to_string())],
            )
            .await?)
    }

    async fn update_dataset(&self, id: u64, name: &str) -> Result<()> {
        Ok(self
            .dispatcher
            .put_query::<()>(
                &format!("/api/dataset/admin/{}", id),
                &[("dataName", name.to_string())],
            )
            .await?)
    }

    async fn delete_dataset(&self, id: u64) -> Result<()> {
        Ok(self
            .dispatcher
            .delete::<()>(&format!("/api/dataset/admin/{}", id))
            .await?)
    }
}

#[async_trait]
impl SystemApi for MhflClient {
    async fn system_resources(&self) -> Result<SystemResources> {
        Ok(self.dispatcher.get("/api/system/resources").await?)
    }
}
