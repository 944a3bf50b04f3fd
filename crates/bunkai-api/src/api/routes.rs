//! ルーター定義

use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::analyze;
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// ルートは持たず、全パス・全メソッドを `analyze` で受ける。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new().fallback(analyze).layer(TraceLayer::new_for_http()).with_state(state)
}

/// サーバーを起動する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// バインドまたはサーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener =
    tokio::net::TcpListener::bind(&addr).await.map_err(|e| ApiError::bind(addr.as_str(), e))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}
