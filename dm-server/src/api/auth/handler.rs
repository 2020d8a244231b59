//! Auth API Handlers

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::{CurrentAdmin, password};
use crate::core::ServerState;
use crate::db::repository::admin_user;
use crate::utils::validation::{MAX_PASSWORD_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response with the bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub admin: AdminInfo,
}

#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: i64,
    pub email: String,
}

/// POST /api/auth/login — credential exchange
///
/// Unknown email and wrong password return the same uniform error.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = admin_user::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    let password_valid = password::verify_password(&req.password, &admin.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !password_valid {
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(admin.id, &admin.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(admin_id = admin.id, email = %admin.email, "Admin logged in");

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer",
        admin: AdminInfo {
            id: admin.id,
            email: admin.email,
        },
    }))
}

/// GET /api/auth/me — current admin info
pub async fn me(Extension(admin): Extension<CurrentAdmin>) -> Json<AdminInfo> {
    Json(AdminInfo {
        id: admin.id,
        email: admin.email,
    })
}

/// Change password payload
#[derive(Debug, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// POST /api/auth/change-password
pub async fn change_password(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentAdmin>,
    Json(req): Json<PasswordChange>,
) -> AppResult<Json<AdminInfo>> {
    validate_required_text(&req.new_password, "new_password", MAX_PASSWORD_LEN)?;

    let admin = admin_user::find_by_id(&state.pool, current.id)
        .await?
        .ok_or_else(|| AppError::not_found("Admin account not found"))?;

    let current_valid = password::verify_password(&req.current_password, &admin.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !current_valid {
        return Err(AppError::validation("Current password is incorrect"));
    }

    let new_hash = password::hash_password(&req.new_password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
    admin_user::update_password(&state.pool, admin.id, &new_hash).await?;

    tracing::info!(admin_id = admin.id, "Admin password changed");

    Ok(Json(AdminInfo {
        id: admin.id,
        email: admin.email,
    }))
}
