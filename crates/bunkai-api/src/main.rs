//! bunkai-api サーバーエントリーポイント

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bunkai_api::ApiError;
use bunkai_api::api::{AppState, run_server};
use bunkai_api::config::{Cli, Config};
use bunkai_api::service::build_tokenizer;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  let cli = Cli::parse();

  // ロギングの初期化
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
  tracing_subscriber::registry().with(env_filter).with(tracing_subscriber::fmt::layer()).init();

  // 設定の読み込み
  let config = Config::from_env(cli.port)?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    preset = %config.dictionary.preset,
    local_dict = ?config.dictionary.local_path,
    "設定を読み込みました"
  );

  // 辞書のロード（初回はダウンロード）は重いので blocking プールで行う
  let tokenizer = {
    let config = config.clone();
    tokio::task::spawn_blocking(move || build_tokenizer(&config))
      .await
      .map_err(|e| ApiError::internal(format!("辞書ロードの実行に失敗しました: {e}")))??
  };
  tracing::info!("形態素解析器を初期化しました");

  let state = AppState::new(config, tokenizer);

  // サーバー起動
  run_server(state).await
}
