use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    diary::{
        dto::{CreateEntryRequest, EntryResponse, MessageResponse},
        repo_types::DiaryEntry,
    },
    error::ApiError,
    state::AppState,
};

pub fn diary_routes() -> Router<AppState> {
    Router::new()
        .route("/diary", get(list_entries).post(create_entry))
        .route("/diary/:id", delete(delete_entry))
}

#[instrument(skip(state, payload))]
pub async fn create_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<Json<EntryResponse>, ApiError> {
    let entry = DiaryEntry::create(
        &state.db,
        user_id,
        &payload.subject,
        &payload.date,
        &payload.time,
        &payload.content,
        &payload.theme,
    )
    .await?;

    info!(user_id = %user_id, entry_id = %entry.id, "diary entry created");
    Ok(Json(entry.into()))
}

#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<EntryResponse>>, ApiError> {
    let entries = DiaryEntry::list_by_user(&state.db, user_id).await?;
    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

/// Deletes by id alone; the caller must hold a valid token but is not
/// required to own the entry. A missing id still acknowledges.
#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = DiaryEntry::delete_by_id(&state.db, id).await?;

    info!(user_id = %user_id, entry_id = %id, removed, "diary entry delete");
    Ok(Json(MessageResponse {
        msg: "Deleted".into(),
    }))
}
