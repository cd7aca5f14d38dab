use contracts::auth::{AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest};
use contracts::domain::user::User;

use crate::shared::api::{self, RequestConfig};
use crate::system::session::storage;

/// Create an account. A 401 here is an expected outcome, so the automatic
/// redirect is suppressed.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, String> {
    let response = api::post::<AuthResponse, _>(
        "/auth/register",
        request,
        &RequestConfig::without_auto_redirect(),
    )
    .await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}

/// Log in and persist the returned session pair.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, String> {
    let response = api::post::<AuthResponse, _>(
        "/auth/login",
        request,
        &RequestConfig::without_auto_redirect(),
    )
    .await?;
    let auth = response
        .data
        .ok_or_else(|| "Empty response from server".to_string())?;
    storage::save_session(&auth.token, &auth.user);
    Ok(auth)
}

/// Account behind the held token.
pub async fn me() -> Result<User, String> {
    let response = api::get::<User>("/auth/me", &RequestConfig::default()).await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}

/// Like [`me`], but without the 401 interceptor. Used by session restore,
/// where a stale token should clear quietly instead of redirecting.
pub async fn me_silent() -> Result<User, String> {
    let response = api::get::<User>("/auth/me", &RequestConfig::without_auto_redirect()).await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}

pub async fn update_profile(request: &UpdateProfileRequest) -> Result<User, String> {
    let response = api::patch::<User, _>("/auth/me", request, &RequestConfig::default()).await?;
    response
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}
