//! Handlers for `/student`.
//!
//! | Method   | Query | Body | Result |
//! |----------|-------|------|--------|
//! | `GET`    | `grade_id` > `no` > `id` > none | — | array, or one student for `id` |
//! | `POST`   | — | student without `id` | `added` / `failed` |
//! | `PUT`    | — | student with `id` | `updated` / `db-error` / `other-error` |
//! | `DELETE` | `id` | — | `deleted` / `failed` |

use axum::{
  Json,
  extract::{Query, State, rejection::JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
  AppState, CampusStore,
  dto::{self, Message, StudentDto},
  error::{ApiError, parse_id},
  payload::{StudentPayload, accept},
};

// ─── Get ─────────────────────────────────────────────────────────────────────

/// Raw query parameters; numbers are parsed by the handler so a bad value
/// gets the usual error body rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct GetParams {
  pub id:       Option<String>,
  pub no:       Option<String>,
  pub grade_id: Option<String>,
}

/// `GET /student[?grade_id=<id>|?no=<no>|?id=<id>]`
pub async fn get<S: CampusStore>(
  State(state): State<AppState<S>>,
  Query(params): Query<GetParams>,
) -> Result<Response, ApiError> {
  let svc = &state.students;

  if let Some(grade_id) = params.grade_id {
    let grade_id = parse_id("grade_id", &grade_id)?;
    let students = svc.find_all_by_grade(grade_id).await?;
    return Ok(Json(dto::many::<_, StudentDto>(&students)).into_response());
  }

  if let Some(no) = params.no {
    let students = svc.find_all_by_no(&no).await?;
    return Ok(Json(dto::many::<_, StudentDto>(&students)).into_response());
  }

  if let Some(id) = params.id {
    let student = svc.find(parse_id("id", &id)?).await?;
    return Ok(Json(StudentDto::from(&student)).into_response());
  }

  let students = svc.find_all().await?;
  Ok(Json(dto::many::<_, StudentDto>(&students)).into_response())
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /student`
pub async fn create<S: CampusStore>(
  State(state): State<AppState<S>>,
  body: Result<Json<StudentPayload>, JsonRejection>,
) -> Json<Message> {
  let added = match accept(body).and_then(StudentPayload::into_input) {
    Ok(input) => state.students.add(input).await,
    Err(e) => {
      tracing::warn!(error = %e, "rejected student payload");
      false
    }
  };
  Json(if added { Message::ADDED } else { Message::FAILED })
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /student`
pub async fn update<S: CampusStore>(
  State(state): State<AppState<S>>,
  body: Result<Json<StudentPayload>, JsonRejection>,
) -> Json<Message> {
  let outcome = match accept(body).and_then(StudentPayload::into_input) {
    Ok(input) => state.students.update(input).await,
    Err(e) => Err(e),
  };
  Json(match outcome {
    Ok(()) => Message::UPDATED,
    Err(e) if e.is_sql() => Message::DB_ERROR,
    Err(_) => Message::OTHER_ERROR,
  })
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
  pub id: Option<String>,
}

/// `DELETE /student?id=<id>`
pub async fn delete<S: CampusStore>(
  State(state): State<AppState<S>>,
  Query(params): Query<DeleteParams>,
) -> Response {
  let Some(id) = params.id.as_deref().and_then(|raw| parse_id("id", raw).ok()) else {
    return (StatusCode::BAD_REQUEST, Json(Message::FAILED)).into_response();
  };
  let deleted = state.students.delete(id).await;
  Json(if deleted { Message::DELETED } else { Message::FAILED }).into_response()
}
