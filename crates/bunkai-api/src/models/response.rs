//! Response Model Definition

use axum::{
  Json,
  response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::{AnalysisFailure, CODE_OK, STATUS_OK};

/// Morphological Analysis Response
///
/// ```json
/// { "Status": 0, "Code": "OK", "Result": ["すもも\t名詞,一般,..."] }
/// ```
///
/// `Result` is always serialized as an array, empty on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResponse {
  /// Outcome code (0 = success)
  #[serde(rename = "Status")]
  pub status: i32,
  /// Human-readable outcome label
  #[serde(rename = "Code")]
  pub code: String,
  /// Token strings in tokenizer emission order
  #[serde(rename = "Result")]
  pub result: Vec<String>,
}

impl AnalysisResponse {
  /// Initial state of every request: `0`, `"OK"`, `[]`
  #[must_use]
  pub fn new() -> Self {
    Self {
      status: STATUS_OK,
      code: CODE_OK.to_string(),
      result: Vec::new(),
    }
  }

  /// Records a failure; any partial result is discarded
  pub fn fail(&mut self, failure: &AnalysisFailure) {
    self.status = failure.status();
    self.code = failure.code();
    self.result.clear();
  }
}

impl Default for AnalysisResponse {
  fn default() -> Self {
    Self::new()
  }
}

/// The only place a response body is produced.
///
/// Always HTTP 200 with `Content-Type: application/json`; outcomes live in `Status`.
impl IntoResponse for AnalysisResponse {
  fn into_response(self) -> Response {
    Json(self).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_response_serializes_all_fields() {
    let json = serde_json::to_string(&AnalysisResponse::new()).unwrap();
    assert_eq!(json, r#"{"Status":0,"Code":"OK","Result":[]}"#);
  }

  #[test]
  fn fail_overwrites_status_and_clears_result() {
    let mut response = AnalysisResponse::new();
    response.result.push("東京\t名詞".to_string());

    response.fail(&AnalysisFailure::not_post("GET"));

    assert_eq!(response.status, 1);
    assert_eq!(
      serde_json::to_string(&response).unwrap(),
      r#"{"Status":1,"Code":"Not POST method","Result":[]}"#
    );
  }

  #[test]
  fn result_keeps_insertion_order() {
    let mut response = AnalysisResponse::new();
    response.result.extend(["b".to_string(), "a".to_string(), "c".to_string()]);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["Result"], serde_json::json!(["b", "a", "c"]));
  }

  #[tokio::test]
  async fn into_response_is_200_json() {
    let mut response = AnalysisResponse::new();
    response.fail(&AnalysisFailure::body_read("closed"));

    let http = response.into_response();
    assert_eq!(http.status(), axum::http::StatusCode::OK);
    assert_eq!(
      http.headers()[axum::http::header::CONTENT_TYPE],
      "application/json"
    );

    let body = axum::body::to_bytes(http.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
      body.as_ref(),
      br#"{"Status":4,"Code":"Request body read error.","Result":[]}"#
    );
  }
}
