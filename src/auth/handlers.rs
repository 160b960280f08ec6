use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, MessageResponse, SignupRequest, TokenResponse, VerifyRequest},
        jwt::JwtKeys,
        otp::generate_otp,
        password::{hash_password, verify_password},
        repo_types::User,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/verify", post(verify))
        .route("/login", post(login))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if payload.password.len() < 3 {
        warn!("password too short");
        return Err(ApiError::Validation("Password minimum 3 characters".into()));
    }

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(&payload.password)?;
    let otp = generate_otp();

    let user = User::create(
        &state.db,
        &payload.name,
        &payload.email,
        &payload.phone,
        &hash,
        &otp,
    )
    .await?;

    // The code never goes back to the caller, only out the channel.
    state.notifier.send_otp(&user.email, &otp).await?;

    info!(user_id = %user.id, email = %user.email, "user signed up, pending verification");
    Ok(Json(MessageResponse {
        msg: "OTP generated (check server log)".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn verify(
    State(state): State<AppState>,
    Json(payload): Json<VerifyRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    // Exact string match; a verified user has no stored code and never matches.
    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) if u.otp.as_deref() == Some(payload.otp.as_str()) => u,
        _ => {
            warn!(email = %payload.email, "otp mismatch");
            return Err(ApiError::Auth("Invalid OTP".into()));
        }
    };

    User::mark_verified(&state.db, user.id).await?;

    info!(user_id = %user.id, "user verified");
    Ok(Json(MessageResponse {
        msg: "Verified".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) if u.verified => u,
        _ => {
            warn!(email = %payload.email, "login rejected: unknown or unverified");
            return Err(ApiError::Auth("Invalid credentials".into()));
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::Auth("Invalid credentials".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("ann@x.com"));
        assert!(is_valid_email("Ann@X.COM"));
        assert!(!is_valid_email("ann"));
        assert!(!is_valid_email("ann@x"));
        assert!(!is_valid_email("ann @x.com"));
    }
}
