//! # Authentication Endpoints
//!
//! Handles resident registration, login, logout and token verification.

use shared::{AuthData, LoginRequest, RegisterRequest};

use super::client::{read_ack, read_envelope, ApiClient};
use super::error::ApiError;

/// Register a new resident.
#[tracing::instrument(skip(client, request), fields(email = %request.email, flat = %request.flat_number))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> Result<AuthData, ApiError> {
    tracing::info!("Attempting registration");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(client.url("/auth/register"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Registration network error");
            ApiError::from(e)
        })?;

    let result = read_envelope::<AuthData>(response).await;
    match &result {
        Ok(data) => tracing::info!(
            user_id = %data.user.id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Registration successful"
        ),
        Err(e) => tracing::warn!(error = %e, duration_ms = start.elapsed().as_millis() as u64, "Registration failed"),
    }
    result
}

/// Login with email and password.
///
/// Bounded by the client's login timeout rather than the general request timeout.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<AuthData, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(client.url("/auth/login"))
        .timeout(client.login_timeout)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            ApiError::from(e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    let result = read_envelope::<AuthData>(response).await;
    match &result {
        Ok(_) => tracing::info!(duration_ms = duration.as_millis() as u64, "Login successful"),
        Err(e) => tracing::warn!(
            status = status.as_u16(),
            error = %e,
            duration_ms = duration.as_millis() as u64,
            "Login failed"
        ),
    }
    result
}

/// Invalidate the token server-side.
#[tracing::instrument(skip_all)]
pub async fn logout(client: &ApiClient, token: &str) -> Result<(), ApiError> {
    let response = ApiClient::authorized(client.client.post(client.url("/auth/logout")), token)
        .send()
        .await?;

    read_ack(response).await
}

/// Check a stored token and fetch the profile it belongs to.
#[tracing::instrument(skip_all)]
pub async fn verify_token(client: &ApiClient, token: &str) -> Result<AuthData, ApiError> {
    let response = ApiClient::authorized(client.client.get(client.url("/auth/verify")), token)
        .send()
        .await?;

    let result = read_envelope::<AuthData>(response).await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Token verification failed");
    }
    result
}
