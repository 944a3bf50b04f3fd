//! API統合テスト
//!
//! Router 経由で HTTP エンドポイントの振る舞いを検証する。
//! スタブトークナイザーを使用するため、辞書ロード不要で軽量かつ高速なテスト。

use std::sync::Arc;
use std::time::Duration;

use axum::{
  Router,
  body::{Body, Bytes},
  http::{Request, StatusCode, header},
};
use bunkai::errors::TokenizerError;
use bunkai::tokenizer::SentenceTokenizer;
use serde_json::{Value, json};
use tower::ServiceExt;

use bunkai_api::{
  api::{AppState, create_router},
  config::Config,
};

/// 統合テスト用の軽量スタブトークナイザー
///
/// - 空白区切りで分割し、`語\t素性` の形で返す
/// - `"FAIL"` を含む文: トークナイザーエラー
/// - `"SLOW"` を含む文: 200ms 待ってから返す
struct StubTokenizer;

impl SentenceTokenizer for StubTokenizer {
  fn tokenize(&self, sentence: &str) -> Result<Vec<String>, TokenizerError> {
    if sentence.contains("FAIL") {
      return Err(TokenizerError::SentenceTooLong { chars: 99, max: 1 });
    }
    if sentence.contains("SLOW") {
      std::thread::sleep(Duration::from_millis(200));
    }
    Ok(sentence.split_whitespace().map(|word| format!("{word}\t名詞,一般")).collect())
  }
}

fn test_config() -> Config {
  let mut config = Config::from_lookup(0, |_| None).expect("default config");
  config.bind_addr = "127.0.0.1:0".to_string();
  config
}

/// テスト用の Router を構築する
fn test_app_with(config: Config) -> Router {
  let tokenizer: Arc<dyn SentenceTokenizer> = Arc::new(StubTokenizer);
  create_router(AppState::new(config, tokenizer))
}

fn test_app() -> Router {
  test_app_with(test_config())
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(body.into())
    .unwrap()
}

/// リクエストを送り、HTTP 200 / application/json を確認して JSON を返す
async fn send(app: Router, request: Request<Body>) -> Value {
  let response = app.oneshot(request).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(
    response.headers()[header::CONTENT_TYPE],
    "application/json"
  );

  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&body_bytes).expect("body should be valid json")
}

fn assert_shape(json: &Value) {
  assert!(json["Status"].is_i64(), "Status missing: {json}");
  assert!(json["Code"].is_string(), "Code missing: {json}");
  assert!(json["Result"].is_array(), "Result must be an array: {json}");
}

// ============================================================================
// 正常系テスト
// ============================================================================

#[tokio::test]
async fn post_sentence_returns_tokens_in_order() {
  let payload = json!({ "Token": "01234", "Sentence": "すもも も もも も もも の うち" });

  let json = send(test_app(), post("/", payload.to_string())).await;

  assert_eq!(
    json,
    json!({
      "Status": 0,
      "Code": "OK",
      "Result": [
        "すもも\t名詞,一般", "も\t名詞,一般", "もも\t名詞,一般", "も\t名詞,一般",
        "もも\t名詞,一般", "の\t名詞,一般", "うち\t名詞,一般"
      ]
    })
  );
}

#[tokio::test]
async fn post_empty_sentence_returns_ok_with_empty_result() {
  let payload = json!({ "Token": "t1", "Sentence": "" });

  let json = send(test_app(), post("/", payload.to_string())).await;

  assert_eq!(json, json!({ "Status": 0, "Code": "OK", "Result": [] }));
}

#[tokio::test]
async fn any_path_reaches_the_handler() {
  let payload = json!({ "Token": "t1", "Sentence": "東京" });

  let json = send(test_app(), post("/api/v1/parse?x=1", payload.to_string())).await;

  assert_eq!(json["Status"], 0);
  assert_eq!(json["Result"], json!(["東京\t名詞,一般"]));
}

#[tokio::test]
async fn field_names_match_case_insensitively_and_last_wins() {
  let body = r#"{"TOKEN": "t1", "sentence": "東京", "SENTENCE": "大阪"}"#;

  let json = send(test_app(), post("/", body)).await;

  assert_eq!(json, json!({ "Status": 0, "Code": "OK", "Result": ["大阪\t名詞,一般"] }));
}

#[tokio::test]
async fn top_level_null_is_an_empty_sentence() {
  let json = send(test_app(), post("/", "null")).await;

  assert_eq!(json, json!({ "Status": 0, "Code": "OK", "Result": [] }));
}

#[tokio::test]
async fn same_request_twice_gives_identical_responses() {
  let app = test_app();
  let payload = json!({ "Token": "t1", "Sentence": "東京 タワー" }).to_string();

  let first = send(app.clone(), post("/", payload.clone())).await;
  let second = send(app, post("/", payload)).await;

  assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_requests_do_not_interleave() {
  let app = test_app();

  let handles: Vec<_> = (0..16)
    .map(|i| {
      let app = app.clone();
      tokio::spawn(async move {
        let words: Vec<String> = (0..8).map(|j| format!("w{i}_{j}")).collect();
        let payload = json!({ "Token": "t", "Sentence": words.join(" ") }).to_string();
        let json = send(app, post("/", payload)).await;
        (words, json)
      })
    })
    .collect();

  for handle in handles {
    let (words, json) = handle.await.unwrap();
    let expected: Vec<String> = words.iter().map(|w| format!("{w}\t名詞,一般")).collect();
    assert_eq!(json["Result"], json!(expected));
  }
}

// ============================================================================
// 異常系テスト: Status 1（メソッド）
// ============================================================================

#[tokio::test]
async fn non_post_methods_return_status_1() {
  for method in ["GET", "PUT", "DELETE", "PATCH", "OPTIONS"] {
    let request = Request::builder()
      .method(method)
      .uri("/")
      .body(Body::from(r#"{"Token":"t","Sentence":"東京"}"#))
      .unwrap();

    let json = send(test_app(), request).await;

    assert_eq!(
      json,
      json!({ "Status": 1, "Code": "Not POST method", "Result": [] }),
      "method: {method}"
    );
  }
}

// ============================================================================
// 異常系テスト: Status 2（JSON）
// ============================================================================

#[tokio::test]
async fn invalid_bodies_return_status_2() {
  let bodies = [
    "",
    "{ invalid json",
    r#"{"Token": "t1", "Sentence": "東京""#,
    r#"{"Token": "t1", "Sentence": 42}"#,
    r#"{"Token": ["t1"], "Sentence": "東京"}"#,
    r#""just a string""#,
  ];

  for body in bodies {
    let json = send(test_app(), post("/", body)).await;

    assert_eq!(
      json,
      json!({ "Status": 2, "Code": "JSON parse error.", "Result": [] }),
      "body: {body:?}"
    );
  }
}

// ============================================================================
// 異常系テスト: Status 3（トークナイザー）
// ============================================================================

#[tokio::test]
async fn tokenizer_failure_returns_status_3() {
  let payload = json!({ "Token": "t1", "Sentence": "FAIL here" });

  let json = send(test_app(), post("/", payload.to_string())).await;

  assert_shape(&json);
  assert_eq!(json["Status"], 3);
  assert!(
    json["Code"].as_str().unwrap().starts_with("Tokenizer error: "),
    "code: {}",
    json["Code"]
  );
  assert_eq!(json["Result"], json!([]));
}

#[tokio::test]
async fn slow_tokenizer_hits_deadline() {
  let mut config = test_config();
  config.tokenize_timeout = Duration::from_millis(20);

  let payload = json!({ "Token": "t1", "Sentence": "SLOW sentence" });
  let json = send(test_app_with(config), post("/", payload.to_string())).await;

  assert_eq!(json["Status"], 3);
  assert!(json["Code"].as_str().unwrap().contains("timed out"));
  assert_eq!(json["Result"], json!([]));
}

// ============================================================================
// 異常系テスト: Status 4（ボディ読み込み）
// ============================================================================

#[tokio::test]
async fn oversized_body_returns_status_4() {
  let mut config = test_config();
  config.max_body_bytes = 64;

  let payload = json!({ "Token": "t1", "Sentence": "あ".repeat(100) });
  let json = send(test_app_with(config), post("/", payload.to_string())).await;

  assert_eq!(
    json,
    json!({ "Status": 4, "Code": "Request body read error.", "Result": [] })
  );
}

#[tokio::test]
async fn stalled_body_hits_read_deadline() {
  let mut config = test_config();
  config.body_read_timeout = Duration::from_millis(20);

  // 終わらないボディ（送信側が止まったクライアント）
  let stalled = futures::stream::pending::<Result<Bytes, std::io::Error>>();
  let json = send(test_app_with(config), post("/", Body::from_stream(stalled))).await;

  assert_eq!(
    json,
    json!({ "Status": 4, "Code": "Request body read error.", "Result": [] })
  );
}

// ============================================================================
// 全経路でレスポンスの形が保たれる
// ============================================================================

#[tokio::test]
async fn every_outcome_has_all_fields() {
  let requests = vec![
    post("/", json!({ "Sentence": "東京" }).to_string()),
    post("/", "nope"),
    post("/", json!({ "Sentence": "FAIL" }).to_string()),
    Request::builder().method("GET").uri("/").body(Body::empty()).unwrap(),
  ];

  for request in requests {
    let json = send(test_app(), request).await;
    assert_shape(&json);
  }
}
