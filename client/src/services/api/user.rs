//! # User Endpoints
//!
//! Profile fetch and mutation calls (bearer auth required).

use shared::dto::user::{
    UpdatePasswordRequest, UpdateProfileRequest, UserProfile, UserResponse,
};

use super::client::ApiClient;
use super::{decode, ApiError, ApiResult};

/// Fetch the profile behind the current bearer token.
///
/// This is the token-validation call used at session bootstrap: a failure
/// here means the persisted token is no longer good.
#[tracing::instrument(skip(client))]
pub async fn current_user(client: &ApiClient) -> ApiResult<UserProfile> {
    let response = client
        .authorize(client.http.get(client.url("/user/me")))
        .await
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "whoami network error");
            ApiError::Network(e.to_string())
        })?;

    decode::<UserResponse>(response).await.map(|body| body.user)
}

/// Update name/avatar of the authenticated user.
pub async fn update_profile(
    client: &ApiClient,
    update: UpdateProfileRequest,
) -> ApiResult<UserProfile> {
    let response = client
        .authorize(client.http.patch(client.url("/user/update-me")))
        .await
        .json(&update)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode::<UserResponse>(response).await.map(|body| body.user)
}

/// Change the authenticated user's password.
pub async fn update_password(
    client: &ApiClient,
    request: UpdatePasswordRequest,
) -> ApiResult<shared::dto::auth::MessageResponse> {
    let response = client
        .authorize(client.http.patch(client.url("/user/update-password")))
        .await
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}
