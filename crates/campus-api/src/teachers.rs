//! Handlers for `/teacher`.
//!
//! Same contract as `/student`, with `GET` precedence `no` > `id` > none.

use axum::{
  Json,
  extract::{Query, State, rejection::JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
  AppState, CampusStore,
  dto::{self, Message, TeacherDto},
  error::{ApiError, parse_id},
  payload::{TeacherPayload, accept},
};

#[derive(Debug, Default, Deserialize)]
pub struct GetParams {
  pub id: Option<String>,
  pub no: Option<String>,
}

/// `GET /teacher[?no=<no>|?id=<id>]`
pub async fn get<S: CampusStore>(
  State(state): State<AppState<S>>,
  Query(params): Query<GetParams>,
) -> Result<Response, ApiError> {
  let svc = &state.teachers;

  if let Some(no) = params.no {
    let teachers = svc.find_all_by_no(&no).await?;
    return Ok(Json(dto::many::<_, TeacherDto>(&teachers)).into_response());
  }

  if let Some(id) = params.id {
    let teacher = svc.find(parse_id("id", &id)?).await?;
    return Ok(Json(TeacherDto::from(&teacher)).into_response());
  }

  let teachers = svc.find_all().await?;
  Ok(Json(dto::many::<_, TeacherDto>(&teachers)).into_response())
}

/// `POST /teacher`
pub async fn create<S: CampusStore>(
  State(state): State<AppState<S>>,
  body: Result<Json<TeacherPayload>, JsonRejection>,
) -> Json<Message> {
  let added = match accept(body).and_then(TeacherPayload::into_input) {
    Ok(input) => state.teachers.add(input).await,
    Err(e) => {
      tracing::warn!(error = %e, "rejected teacher payload");
      false
    }
  };
  Json(if added { Message::ADDED } else { Message::FAILED })
}

/// `PUT /teacher`
pub async fn update<S: CampusStore>(
  State(state): State<AppState<S>>,
  body: Result<Json<TeacherPayload>, JsonRejection>,
) -> Json<Message> {
  let outcome = match accept(body).and_then(TeacherPayload::into_input) {
    Ok(input) => state.teachers.update(input).await,
    Err(e) => Err(e),
  };
  Json(match outcome {
    Ok(()) => Message::UPDATED,
    Err(e) if e.is_sql() => Message::DB_ERROR,
    Err(_) => Message::OTHER_ERROR,
  })
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
  pub id: Option<String>,
}

/// `DELETE /teacher?id=<id>`
pub async fn delete<S: CampusStore>(
  State(state): State<AppState<S>>,
  Query(params): Query<DeleteParams>,
) -> Response {
  let Some(id) = params.id.as_deref().and_then(|raw| parse_id("id", raw).ok()) else {
    return (StatusCode::BAD_REQUEST, Json(Message::FAILED)).into_response();
  };
  let deleted = state.teachers.delete(id).await;
  Json(if deleted { Message::DELETED } else { Message::FAILED }).into_response()
}
