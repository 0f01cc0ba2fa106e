//! RSVP API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository::RsvpRepository;
use crate::utils::{AppError, AppResult};
use shared::response::RsvpCreated;
use shared::validation::parse_submission;

/// Submit an RSVP
///
/// 接受未定型 payload，先过共享校验 schema，再单行写入。
/// 校验失败不触碰存储；存储失败原样上抛给调用方，由来宾决定是否重试。
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<RsvpCreated>)> {
    let submission = parse_submission(payload).map_err(AppError::validation)?;

    let repo = RsvpRepository::new(state.db.clone());
    let rsvp = repo.create(submission).await?;

    tracing::info!(target: "rsvp", id = %rsvp.id, attending = %rsvp.attending, "RSVP recorded");

    Ok((StatusCode::CREATED, Json(RsvpCreated::new(rsvp))))
}
