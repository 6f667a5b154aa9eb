//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity.
//!
//! [`ApiService`] abstracts the backend gateway and [`SessionVault`] the
//! persisted key-value store, so the session manager and the invite
//! resolver can be driven by mocks in tests and by the real
//! [`crate::services::api::ApiClient`] / [`crate::services::storage::FileVault`]
//! in production.

use async_trait::async_trait;
use shared::dto::auth::{
    AuthResponse, LoginRequest, MessageResponse, SignupRequest, VerifyEmailRequest,
};
use shared::dto::list::{JoinListResponse, ListItem, ShoppingList, UpdateItemRequest};
use shared::dto::user::{UpdatePasswordRequest, UpdateProfileRequest, UserProfile};

use crate::app::ThemeMode;
use crate::core::error::Result;
use crate::services::api::ApiResult;

/// Trait for backend API operations.
///
/// One method per REST endpoint the client consumes. Implementations must
/// not retry or cache; each call resolves with a decoded payload or fails
/// with a tagged [`crate::services::api::ApiError`].
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a new account. Success means a verification code was mailed.
    async fn signup(&self, request: SignupRequest) -> ApiResult<MessageResponse>;

    /// Exchange credentials for a bearer token and profile.
    async fn login(&self, request: LoginRequest) -> ApiResult<AuthResponse>;

    /// Confirm an emailed verification code. Succeeds like a login.
    async fn verify_email(&self, request: VerifyEmailRequest) -> ApiResult<AuthResponse>;

    /// Re-send the verification code for a pending signup.
    async fn send_verification_code(&self, email: &str) -> ApiResult<MessageResponse>;

    /// Fetch the profile behind the current bearer token (`GET /user/me`).
    async fn current_user(&self) -> ApiResult<UserProfile>;

    /// Update name/avatar of the authenticated user.
    async fn update_profile(&self, update: UpdateProfileRequest) -> ApiResult<UserProfile>;

    /// Change the authenticated user's password.
    async fn update_password(&self, request: UpdatePasswordRequest) -> ApiResult<MessageResponse>;

    /// Redeem an invite code for membership in its list.
    async fn join_list(&self, invite_code: &str) -> ApiResult<JoinListResponse>;

    /// Create a list owned by the authenticated user.
    async fn create_list(&self, name: &str) -> ApiResult<ShoppingList>;

    /// All lists the user owns or is a member of.
    async fn lists(&self) -> ApiResult<Vec<ShoppingList>>;

    /// A single list with members and items.
    async fn list_details(&self, list_id: &str) -> ApiResult<ShoppingList>;

    /// Invite a user to a list by email.
    async fn invite_member(&self, list_id: &str, email: &str) -> ApiResult<MessageResponse>;

    /// Remove a member from a list.
    async fn remove_member(&self, list_id: &str, member_id: &str) -> ApiResult<MessageResponse>;

    /// Add an item to a list.
    async fn add_item(&self, list_id: &str, name: &str, quantity: u32) -> ApiResult<ListItem>;

    /// Rename an item or change its quantity.
    async fn update_item(
        &self,
        list_id: &str,
        item_id: &str,
        update: UpdateItemRequest,
    ) -> ApiResult<ListItem>;

    /// Mark an item purchased or unpurchased.
    async fn set_item_purchased(
        &self,
        list_id: &str,
        item_id: &str,
        purchased: bool,
    ) -> ApiResult<ListItem>;

    /// Delete an item from a list.
    async fn remove_item(&self, list_id: &str, item_id: &str) -> ApiResult<()>;
}

/// Trait for the persisted session store.
///
/// Wraps local key-value storage for the token, the serialized user
/// profile, and the theme preference. Absence of a key is a valid state
/// (first run). Implementations must complete each write before returning
/// so callers can order persistence ahead of in-memory mutation.
#[async_trait]
pub trait SessionVault: Send + Sync {
    /// The persisted bearer token, if any.
    async fn token(&self) -> Result<Option<String>>;

    /// The persisted user profile, if any.
    async fn user(&self) -> Result<Option<UserProfile>>;

    /// The persisted theme preference, if any.
    async fn theme(&self) -> Result<Option<ThemeMode>>;

    /// Persist token and profile as one logical write.
    async fn store_session(&self, token: &str, user: &UserProfile) -> Result<()>;

    /// Replace the persisted profile, leaving the token untouched.
    async fn store_user(&self, user: &UserProfile) -> Result<()>;

    /// Persist the theme preference, independent of the session.
    async fn store_theme(&self, mode: ThemeMode) -> Result<()>;

    /// Remove token and profile. Theme is left alone.
    async fn clear_session(&self) -> Result<()>;
}
