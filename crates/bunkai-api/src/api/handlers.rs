//! HTTPハンドラー定義

use std::time::{Duration, Instant};

use axum::{
  body::{Body, Bytes},
  extract::State,
  http::{Method, Uri},
};
use tracing::{debug, info, warn};

use crate::errors::AnalysisFailure;
use crate::models::{AnalysisRequest, AnalysisResponse};

use super::state::AppState;

/// 形態素解析エンドポイント（全パス・全メソッド）
///
/// # Request Body
/// ```json
/// { "Token": "01234", "Sentence": "解析対象の文" }
/// ```
///
/// # Response
/// 常に 200 OK / `application/json`。結果は本文の `Status` で表す。
/// - 0: 成功
/// - 1: POST 以外のメソッド
/// - 2: JSON パースエラー
/// - 3: トークナイザーエラー
/// - 4: ボディ読み込みエラー
pub async fn analyze(
  State(state): State<AppState>,
  method: Method,
  uri: Uri,
  body: Body,
) -> AnalysisResponse {
  let start = Instant::now();
  let mut response = AnalysisResponse::new();

  // どの経路で終わってもここで失敗を反映し、レスポンスはこの関数の戻り値 1 つだけ
  if let Err(failure) = process(&state, &method, body, &mut response).await {
    warn!(
      %method,
      path = %uri.path(),
      status = failure.status(),
      reason = %failure,
      "形態素解析リクエストが失敗しました"
    );
    response.fail(&failure);
  } else {
    info!(
      path = %uri.path(),
      token_count = response.result.len(),
      elapsed_ms = start.elapsed().as_millis() as u64,
      "形態素解析完了"
    );
  }

  response
}

/// リクエスト処理本体
///
/// 成功時はトークン列を `response` に追加する。失敗は呼び出し元でレスポンスに反映する。
async fn process(
  state: &AppState,
  method: &Method,
  body: Body,
  response: &mut AnalysisResponse,
) -> Result<(), AnalysisFailure> {
  if *method != Method::POST {
    return Err(AnalysisFailure::not_post(method.as_str()));
  }

  let bytes = read_body(body, state.config.max_body_bytes, state.config.body_read_timeout).await?;
  debug!(body_len = bytes.len(), "形態素解析リクエストを受信");

  let request = AnalysisRequest::from_slice(&bytes)?;

  let tokens = state.service.tokenize(request.sentence).await?;
  response.result.extend(tokens);

  Ok(())
}

/// ボディ全体を読み込む（サイズ上限・タイムアウト付き）
async fn read_body(body: Body, limit: usize, timeout: Duration) -> Result<Bytes, AnalysisFailure> {
  match tokio::time::timeout(timeout, axum::body::to_bytes(body, limit)).await {
    Ok(Ok(bytes)) => Ok(bytes),
    Ok(Err(e)) => Err(AnalysisFailure::body_read(e.to_string())),
    Err(_) => Err(AnalysisFailure::body_read(format!(
      "timed out after {} ms",
      timeout.as_millis()
    ))),
  }
}
