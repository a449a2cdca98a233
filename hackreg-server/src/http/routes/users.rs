//! User profile endpoints
//!
//! Profiles are keyed by wallet address. `/users/wallet` is a static route
//! and wins over `/users/{wallet_address}`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use hackreg_core::models::{UserPatch, UserProfile, WalletAddress};

use crate::http::error::ApiError;
use crate::http::extractors::{ApiPath, ApiQuery, JsonBody};
use crate::http::server::AppState;

/// Profile response for GET /users/{wallet_address}
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

/// Profile response for the session routes
#[derive(Debug, Serialize)]
pub struct SessionUserResponse {
    pub success: bool,
    pub user: UserProfile,
}

/// Acknowledgement without a payload
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Body of POST /users/update: the address plus any subset of profile fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(flatten)]
    pub patch: UserPatch,
}

/// Query for GET /users/wallet
#[derive(Debug, Deserialize)]
pub struct WalletQuery {
    pub address: Option<String>,
}

/// GET /users/{wallet_address} - normalized profile
async fn get_profile(
    State(state): State<Arc<AppState>>,
    ApiPath(wallet_address): ApiPath<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let wallet = WalletAddress::new(&wallet_address)?;

    let user = state
        .users
        .find(&wallet)
        .await
        .map_err(|e| ApiError::rejected("loading profile", e))?
        .ok_or_else(|| ApiError::not_found("user", wallet.as_str()))?;

    Ok(Json(ProfileResponse { user }))
}

/// POST /users/update - replace only the named profile fields
async fn update_profile(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<UpdateProfileRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let wallet = WalletAddress::from_optional(req.wallet_address.as_deref())?;

    state
        .users
        .update(&wallet, &req.patch)
        .await
        .map_err(|e| ApiError::rejected("updating profile", e))?
        .ok_or_else(|| ApiError::not_found("user", wallet.as_str()))?;

    tracing::debug!(wallet = %wallet, "profile updated");
    Ok(Json(MessageResponse {
        success: true,
        message: "Profile updated successfully",
    }))
}

/// POST /users/wallet - register the session's wallet, creating a profile on first sight
async fn save_session_wallet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SessionUserResponse>, ApiError> {
    let wallet = state
        .session
        .current_wallet(&headers)
        .await?
        .ok_or_else(|| ApiError::bad_request("no wallet connected"))?;

    let user = state.users.find_or_create(&wallet).await?;

    tracing::info!(wallet = %wallet, "wallet session saved");
    Ok(Json(SessionUserResponse {
        success: true,
        user,
    }))
}

/// GET /users/wallet?address= - profile lookup for a connected wallet
async fn lookup_wallet(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<WalletQuery>,
) -> Result<Json<SessionUserResponse>, ApiError> {
    let wallet = WalletAddress::from_optional(query.address.as_deref())?;

    let user = state
        .users
        .find(&wallet)
        .await?
        .ok_or_else(|| ApiError::not_found("user", wallet.as_str()))?;

    Ok(Json(SessionUserResponse {
        success: true,
        user,
    }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/wallet", get(lookup_wallet).post(save_session_wallet))
        .route("/users/update", post(update_profile))
        .route("/users/{wallet_address}", get(get_profile))
}
