use crate::state::AppState;
use axum::Router;

mod claims;
mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod jwt;
pub mod notify;
mod otp;
pub mod password;
pub mod repo;
pub(crate) mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
