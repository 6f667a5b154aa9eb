//! # Authentication Endpoints
//!
//! Signup, login, and email-verification calls.

use shared::dto::auth::{
    AuthResponse, LoginRequest, MessageResponse, SendVerificationCodeRequest, SignupRequest,
    VerifyEmailRequest,
};
use shared::utils::mask_email;

use super::client::ApiClient;
use super::{decode, ApiError, ApiResult};

/// Register a new account.
pub async fn signup(client: &ApiClient, request: SignupRequest) -> ApiResult<MessageResponse> {
    let response = client
        .authorize(client.http.post(client.url("/auth/signup")))
        .await
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

/// Login with email and password.
#[tracing::instrument(skip(client, request), fields(email = %mask_email(&request.email)))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> ApiResult<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let response = client
        .authorize(client.http.post(client.url("/auth/login")))
        .await
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            ApiError::Network(e.to_string())
        })?;

    let result = decode::<AuthResponse>(response).await;
    if result.is_ok() {
        tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    }
    result
}

/// Confirm an emailed verification code. Success behaves like a login.
#[tracing::instrument(skip(client, request), fields(email = %mask_email(&request.email)))]
pub async fn verify_email(
    client: &ApiClient,
    request: VerifyEmailRequest,
) -> ApiResult<AuthResponse> {
    tracing::info!("Verifying email");

    let response = client
        .authorize(client.http.post(client.url("/auth/verify-email")))
        .await
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Verify-email network error");
            ApiError::Network(e.to_string())
        })?;

    decode(response).await
}

/// Re-send the verification code for a pending signup.
pub async fn send_verification_code(
    client: &ApiClient,
    email: &str,
) -> ApiResult<MessageResponse> {
    let request = SendVerificationCodeRequest {
        email: email.to_string(),
    };

    let response = client
        .authorize(client.http.post(client.url("/auth/send-verification-code")))
        .await
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}
