//! Read-only access to reference rows: `GET /references/{kind}[?id=<id>]`.
//!
//! `kind` is one of `grade`, `degree`, `title`, `school` or `department`.

use std::str::FromStr as _;

use axum::{
  Json,
  extract::{Path, Query, State},
  response::{IntoResponse, Response},
};
use campus_core::{
  Error,
  reference::ReferenceKind,
  store::ReferenceRegistry,
};
use serde::Deserialize;

use crate::{
  AppState, CampusStore,
  dto::{self, DepartmentDto, ReferenceDto},
  error::{ApiError, parse_id},
};

#[derive(Debug, Default, Deserialize)]
pub struct GetParams {
  pub id: Option<String>,
}

/// `GET /references/{kind}[?id=<id>]`
pub async fn get<S: CampusStore>(
  State(state): State<AppState<S>>,
  Path(kind): Path<String>,
  Query(params): Query<GetParams>,
) -> Result<Response, ApiError> {
  let id = params.id.as_deref().map(|raw| parse_id("id", raw)).transpose()?;
  let store = &state.store;

  if kind == "department" {
    return Ok(match id {
      Some(id) => {
        let dept = store
          .find_department(id)
          .await
          .map_err(Into::<Error>::into)?
          .ok_or(Error::NotFound { entity: "department", id })?;
        Json(DepartmentDto::from(&dept)).into_response()
      }
      None => {
        let depts = store.list_departments().await.map_err(Into::<Error>::into)?;
        Json(dto::many::<_, DepartmentDto>(&depts)).into_response()
      }
    });
  }

  let kind = ReferenceKind::from_str(&kind)
    .map_err(|_| ApiError::BadRequest(format!("unknown reference kind {kind:?}")))?;

  Ok(match id {
    Some(id) => {
      let reference = store
        .find_reference(kind, id)
        .await
        .map_err(Into::<Error>::into)?
        .ok_or(Error::NotFound { entity: kind.name(), id })?;
      Json(ReferenceDto::from(&reference)).into_response()
    }
    None => {
      let references = store
        .list_references(kind)
        .await
        .map_err(Into::<Error>::into)?;
      Json(dto::many::<_, ReferenceDto>(&references)).into_response()
    }
  })
}
