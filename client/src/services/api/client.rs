//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::sync::Arc;

use async_trait::async_trait;
use shared::dto::auth::{
    AuthResponse, LoginRequest, MessageResponse, SignupRequest, VerifyEmailRequest,
};
use shared::dto::list::{JoinListResponse, ListItem, ShoppingList, UpdateItemRequest};
use shared::dto::user::{UpdatePasswordRequest, UpdateProfileRequest, UserProfile};

use crate::core::config::ClientConfig;
use crate::core::service::{ApiService, SessionVault};

use super::ApiResult;

/// HTTP client for communicating with the backend API.
///
/// A single instance is shared for the whole process and maintains a
/// connection pool. Every outbound request reads the bearer token fresh
/// from the session vault at request time, so requests issued during
/// bootstrap see the persisted token before any in-memory session exists.
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    base_url: String,
    vault: Arc<dyn SessionVault>,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent
    /// hanging the caller on an unreachable backend.
    pub fn new(config: &ClientConfig, vault: Arc<dyn SessionVault>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: config.api_base_url.clone(),
            vault,
        }
    }

    /// Absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer <token>` when a token is persisted.
    ///
    /// Vault read failures degrade to an unauthenticated request rather
    /// than failing the call; the backend will reject it if auth was
    /// actually required.
    pub(crate) async fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.vault.token().await {
            Ok(Some(token)) => builder.bearer_auth(token),
            Ok(None) => builder,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read token from vault, sending unauthenticated request");
                builder
            }
        }
    }
}

// Implement ApiService trait for ApiClient
#[async_trait]
impl ApiService for ApiClient {
    async fn signup(&self, request: SignupRequest) -> ApiResult<MessageResponse> {
        super::auth::signup(self, request).await
    }

    async fn login(&self, request: LoginRequest) -> ApiResult<AuthResponse> {
        super::auth::login(self, request).await
    }

    async fn verify_email(&self, request: VerifyEmailRequest) -> ApiResult<AuthResponse> {
        super::auth::verify_email(self, request).await
    }

    async fn send_verification_code(&self, email: &str) -> ApiResult<MessageResponse> {
        super::auth::send_verification_code(self, email).await
    }

    async fn current_user(&self) -> ApiResult<UserProfile> {
        super::user::current_user(self).await
    }

    async fn update_profile(&self, update: UpdateProfileRequest) -> ApiResult<UserProfile> {
        super::user::update_profile(self, update).await
    }

    async fn update_password(&self, request: UpdatePasswordRequest) -> ApiResult<MessageResponse> {
        super::user::update_password(self, request).await
    }

    async fn join_list(&self, invite_code: &str) -> ApiResult<JoinListResponse> {
        super::lists::join_list(self, invite_code).await
    }

    async fn create_list(&self, name: &str) -> ApiResult<ShoppingList> {
        super::lists::create_list(self, name).await
    }

    async fn lists(&self) -> ApiResult<Vec<ShoppingList>> {
        super::lists::lists(self).await
    }

    async fn list_details(&self, list_id: &str) -> ApiResult<ShoppingList> {
        super::lists::list_details(self, list_id).await
    }

    async fn invite_member(&self, list_id: &str, email: &str) -> ApiResult<MessageResponse> {
        super::lists::invite_member(self, list_id, email).await
    }

    async fn remove_member(&self, list_id: &str, member_id: &str) -> ApiResult<MessageResponse> {
        super::lists::remove_member(self, list_id, member_id).await
    }

    async fn add_item(&self, list_id: &str, name: &str, quantity: u32) -> ApiResult<ListItem> {
        super::lists::add_item(self, list_id, name, quantity).await
    }

    async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        update: UpdateItemRequest,
    ) -> ApiResult<ListItem> {
        super::lists::update_item(self, list_id, item_id, update).await
    }

    async fn set_item_purchased(
        &self,
        list_id: &str,
        item_id: &str,
        purchased: bool,
    ) -> ApiResult<ListItem> {
        super::lists::set_item_purchased(self, list_id, item_id, purchased).await
    }

    async fn remove_item(&self, list_id: &str, item_id: &str) -> ApiResult<()> {
        super::lists::remove_item(self, list_id, item_id).await
    }
}
