//! Router tests against an in-memory store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use campus_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use super::*;

async fn make_state() -> AppState<SqliteStore> {
  let store = SqliteStore::open_in_memory().await.unwrap();
  AppState::new(Arc::new(store))
}

async fn oneshot(
  state: AppState<SqliteStore>,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> Response {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  router(state).oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

async fn call(
  state: &AppState<SqliteStore>,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let resp = oneshot(state.clone(), method, uri, body).await;
  let status = resp.status();
  (status, json_body(resp).await)
}

fn student_json(no: &str, grade_no: &str) -> Value {
  json!({
    "no": no,
    "description": "A",
    "grade": {"no": grade_no, "description": "Eng"}
  })
}

fn teacher_json(no: &str, name: &str) -> Value {
  json!({
    "no": no,
    "name": name,
    "degree": {"no": "01", "description": "PhD", "remarks": ""},
    "department": {
      "no": "0203",
      "description": "Environmental Engineering",
      "remarks": "",
      "school": {"no": "02", "description": "Engineering"}
    },
    "title": {"no": "01", "description": "Professor", "remarks": ""}
  })
}

// ── Students ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn post_student_then_get_by_id_round_trips() {
  let state = make_state().await;

  let (status, body) =
    call(&state, "POST", "/student", Some(student_json("0201", "02"))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({"message": "added"}));

  let (_, all) = call(&state, "GET", "/student", None).await;
  let id = all[0]["id"].as_i64().unwrap();

  let (status, one) = call(&state, "GET", &format!("/student?id={id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(one["no"], "0201");
  assert_eq!(one["description"], "A");
  assert!(one["grade"]["id"].as_i64().is_some());
  assert_eq!(one["grade"]["no"], "02");
  assert_eq!(one["grade"]["description"], "Eng");
}

#[tokio::test]
async fn post_student_with_unresolvable_grade_fails() {
  let state = make_state().await;
  let payload = json!({"no": "0201", "grade": {"description": "no id or no"}});
  let (_, body) = call(&state, "POST", "/student", Some(payload)).await;
  assert_eq!(body, json!({"message": "failed"}));

  let stale = json!({"no": "0201", "grade": {"id": 99}});
  let (_, body) = call(&state, "POST", "/student", Some(stale)).await;
  assert_eq!(body, json!({"message": "failed"}));

  let (_, all) = call(&state, "GET", "/student", None).await;
  assert_eq!(all, json!([]));
}

#[tokio::test]
async fn post_malformed_json_fails() {
  let state = make_state().await;
  let req = Request::builder()
    .method("POST")
    .uri("/student")
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from("{not json"))
    .unwrap();
  let resp = router(state).oneshot(req).await.unwrap();
  assert_eq!(json_body(resp).await, json!({"message": "failed"}));
}

#[tokio::test]
async fn put_student_reports_outcome() {
  let state = make_state().await;
  call(&state, "POST", "/student", Some(student_json("0201", "02"))).await;
  let (_, all) = call(&state, "GET", "/student", None).await;
  let id = all[0]["id"].as_i64().unwrap();

  let mut update = student_json("0299", "03");
  update["id"] = json!(id);
  let (_, body) = call(&state, "PUT", "/student", Some(update)).await;
  assert_eq!(body, json!({"message": "updated"}));

  let (_, one) = call(&state, "GET", &format!("/student?id={id}"), None).await;
  assert_eq!(one["no"], "0299");
  assert_eq!(one["grade"]["no"], "03");

  let mut missing = student_json("0299", "03");
  missing["id"] = json!(id + 100);
  let (_, body) = call(&state, "PUT", "/student", Some(missing)).await;
  assert_eq!(body, json!({"message": "other-error"}));

  let (_, body) =
    call(&state, "PUT", "/student", Some(student_json("0299", "03"))).await;
  assert_eq!(body, json!({"message": "other-error"}));
}

#[tokio::test]
async fn delete_student_reports_outcome() {
  let state = make_state().await;
  call(&state, "POST", "/student", Some(student_json("0201", "02"))).await;
  let (_, all) = call(&state, "GET", "/student", None).await;
  let id = all[0]["id"].as_i64().unwrap();

  let (_, body) = call(&state, "DELETE", &format!("/student?id={}", id + 1), None).await;
  assert_eq!(body, json!({"message": "failed"}));

  let (_, body) = call(&state, "DELETE", &format!("/student?id={id}"), None).await;
  assert_eq!(body, json!({"message": "deleted"}));

  let (status, body) = call(&state, "DELETE", "/student?id=abc", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body, json!({"message": "failed"}));
}

#[tokio::test]
async fn get_student_parameter_precedence() {
  let state = make_state().await;
  call(&state, "POST", "/student", Some(student_json("0201", "02"))).await;
  call(&state, "POST", "/student", Some(student_json("0202", "03"))).await;
  call(&state, "POST", "/student", Some(student_json("0201", "03"))).await;

  let (_, all) = call(&state, "GET", "/student", None).await;
  assert_eq!(all.as_array().unwrap().len(), 3);
  let first_id = all[0]["id"].as_i64().unwrap();
  let grade_03 = all[1]["grade"]["id"].as_i64().unwrap();

  // grade_id wins over no and id.
  let (_, by_grade) = call(
    &state,
    "GET",
    &format!("/student?grade_id={grade_03}&no=0201&id={first_id}"),
    None,
  )
  .await;
  let nos: Vec<_> = by_grade
    .as_array()
    .unwrap()
    .iter()
    .map(|s| s["no"].as_str().unwrap().to_owned())
    .collect();
  assert_eq!(nos, vec!["0202", "0201"]);

  // no wins over id.
  let (_, by_no) =
    call(&state, "GET", &format!("/student?no=0201&id={first_id}"), None).await;
  assert_eq!(by_no.as_array().unwrap().len(), 2);

  // id alone returns a single object, not an array.
  let (_, one) = call(&state, "GET", &format!("/student?id={first_id}"), None).await;
  assert!(one.is_object());
}

#[tokio::test]
async fn get_student_errors_use_message_body() {
  let state = make_state().await;

  let (status, body) = call(&state, "GET", "/student?id=7", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, json!({"message": "other-error"}));

  let (status, body) = call(&state, "GET", "/student?grade_id=two", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body, json!({"message": "other-error"}));
}

// ── Teachers ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn teacher_crud_round_trip() {
  let state = make_state().await;

  let (_, body) =
    call(&state, "POST", "/teacher", Some(teacher_json("T1", "new teacher"))).await;
  assert_eq!(body, json!({"message": "added"}));

  let (_, all) = call(&state, "GET", "/teacher", None).await;
  let id = all[0]["id"].as_i64().unwrap();
  let dept_id = all[0]["department"]["id"].as_i64().unwrap();
  assert_eq!(all[0]["department"]["school"]["no"], "02");

  let update = json!({
    "id": id,
    "no": "T1",
    "name": "renamed",
    "degree": {"id": all[0]["degree"]["id"]},
    "department": {"id": dept_id},
    "title": {"no": "02", "description": "Lecturer"}
  });
  let (_, body) = call(&state, "PUT", "/teacher", Some(update)).await;
  assert_eq!(body, json!({"message": "updated"}));

  let (_, one) = call(&state, "GET", &format!("/teacher?id={id}"), None).await;
  assert_eq!(one["name"], "renamed");
  assert_eq!(one["title"]["description"], "Lecturer");
  assert_eq!(one["department"]["id"], dept_id);

  let (_, body) = call(&state, "DELETE", &format!("/teacher?id={id}"), None).await;
  assert_eq!(body, json!({"message": "deleted"}));
  let (_, all) = call(&state, "GET", "/teacher", None).await;
  assert_eq!(all, json!([]));
}

#[tokio::test]
async fn get_teacher_no_takes_precedence_over_id() {
  let state = make_state().await;
  call(&state, "POST", "/teacher", Some(teacher_json("T1", "a"))).await;
  call(&state, "POST", "/teacher", Some(teacher_json("T2", "b"))).await;

  let (_, all) = call(&state, "GET", "/teacher", None).await;
  let first_id = all[0]["id"].as_i64().unwrap();

  let (_, by_no) =
    call(&state, "GET", &format!("/teacher?no=T2&id={first_id}"), None).await;
  let by_no = by_no.as_array().unwrap();
  assert_eq!(by_no.len(), 1);
  assert_eq!(by_no[0]["name"], "b");
}

#[tokio::test]
async fn teacher_department_may_be_named_by_no_or_id_alone() {
  let state = make_state().await;
  call(&state, "POST", "/teacher", Some(teacher_json("T1", "a"))).await;
  let (_, all) = call(&state, "GET", "/teacher", None).await;
  let dept_id = all[0]["department"]["id"].as_i64().unwrap();

  let mut by_no = teacher_json("T2", "b");
  by_no["department"] = json!({"no": "0203"});
  let (_, body) = call(&state, "POST", "/teacher", Some(by_no)).await;
  assert_eq!(body, json!({"message": "added"}));

  let mut by_id = teacher_json("T3", "c");
  by_id["department"] = json!({"id": dept_id, "school": {}});
  let (_, body) = call(&state, "POST", "/teacher", Some(by_id)).await;
  assert_eq!(body, json!({"message": "added"}));

  let (_, all) = call(&state, "GET", "/teacher", None).await;
  let depts: Vec<_> = all
    .as_array()
    .unwrap()
    .iter()
    .map(|t| t["department"]["id"].as_i64().unwrap())
    .collect();
  assert_eq!(depts, vec![dept_id, dept_id, dept_id]);

  let (_, listed) = call(&state, "GET", "/references/department", None).await;
  assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_department_without_school_fails() {
  let state = make_state().await;
  let mut payload = teacher_json("T1", "a");
  payload["department"] = json!({"no": "0999"});
  let (_, body) = call(&state, "POST", "/teacher", Some(payload)).await;
  assert_eq!(body, json!({"message": "failed"}));

  let (_, degrees) = call(&state, "GET", "/references/degree", None).await;
  assert_eq!(degrees, json!([]));
}

// ── References ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn references_are_listed_after_lazy_creation() {
  let state = make_state().await;
  call(&state, "POST", "/teacher", Some(teacher_json("T1", "a"))).await;
  call(&state, "POST", "/student", Some(student_json("0201", "02"))).await;

  let (_, grades) = call(&state, "GET", "/references/grade", None).await;
  assert_eq!(grades.as_array().unwrap().len(), 1);

  let (_, depts) = call(&state, "GET", "/references/department", None).await;
  assert_eq!(depts[0]["school"]["description"], "Engineering");

  let id = depts[0]["id"].as_i64().unwrap();
  let (status, dept) =
    call(&state, "GET", &format!("/references/department?id={id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(dept["no"], "0203");

  let (status, _) = call(&state, "GET", "/references/title?id=99", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, body) = call(&state, "GET", "/references/planet", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body, json!({"message": "other-error"}));
}
