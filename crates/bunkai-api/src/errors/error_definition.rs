//! APIエラー定義
//!
//! - `ApiError`: 起動時（設定・辞書ロード・バインド）のエラー
//! - `AnalysisFailure`: リクエスト単位の失敗。HTTP ステータスではなく
//!   レスポンス JSON の `Status` / `Code` として返す

use thiserror::Error;

use bunkai::errors::{BunkaiError, TokenizerError};

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 設定エラー
  Config,
  /// 辞書エラー
  Dictionary,
  /// バインドエラー
  Bind,
  /// 内部エラー
  Internal,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Config => "config_error",
      Self::Dictionary => "dictionary_error",
      Self::Bind => "bind_error",
      Self::Internal => "internal_error",
    }
  }
}

/// APIエラー（起動時）
#[derive(Debug, Error)]
pub enum ApiError {
  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),

  /// 辞書エラー
  #[error("辞書エラー: {0}")]
  Dictionary(String),

  /// バインドエラー
  #[error("バインドに失敗しました: {addr}: {source}")]
  Bind {
    /// バインドしようとしたアドレス
    addr: String,
    /// 元となった IO エラー
    #[source]
    source: std::io::Error,
  },

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Config(_) => ApiErrorKind::Config,
      Self::Dictionary(_) => ApiErrorKind::Dictionary,
      Self::Bind { .. } => ApiErrorKind::Bind,
      Self::Internal(_) => ApiErrorKind::Internal,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// バインドエラーを作成
  #[must_use]
  pub fn bind(addr: impl Into<String>, source: std::io::Error) -> Self {
    Self::Bind {
      addr: addr.into(),
      source,
    }
  }
}

/// BunkaiError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<BunkaiError> for ApiError {
  fn from(err: BunkaiError) -> Self {
    match err {
      BunkaiError::Config(err) => ApiError::config(err.to_string()),
      BunkaiError::Dictionary(_) | BunkaiError::Tokenizer(TokenizerError::Dictionary(_)) => {
        ApiError::Dictionary(err.to_string())
      }
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

// ============================================================================
// リクエスト単位の失敗
// ============================================================================

/// `Status` 値: 成功
pub const STATUS_OK: i32 = 0;
/// `Code` 値: 成功
pub const CODE_OK: &str = "OK";

/// リクエスト処理の失敗
///
/// 全ての失敗はレスポンス JSON に埋め込まれ、HTTP ステータスは常に 200。
///
/// | Status | Code |
/// |---|---|
/// | 1 | `Not POST method` |
/// | 2 | `JSON parse error.` |
/// | 3 | `Tokenizer error: <reason>` |
/// | 4 | `Request body read error.` |
#[derive(Debug, Error)]
pub enum AnalysisFailure {
  /// POST 以外のメソッド
  #[error("POST 以外のメソッドです: {method}")]
  NotPost {
    /// 受信したメソッド
    method: String,
  },

  /// ボディの JSON デコードに失敗
  #[error("JSON のデコードに失敗しました: {0}")]
  JsonParse(#[from] serde_json::Error),

  /// トークナイザーの失敗（エラー・タイムアウト・パニック）
  #[error("トークナイザーエラー: {reason}")]
  Tokenizer {
    /// 失敗の理由
    reason: String,
  },

  /// ボディの読み込みに失敗（切断・サイズ超過・タイムアウト）
  #[error("リクエストボディの読み込みに失敗しました: {reason}")]
  BodyRead {
    /// 失敗の理由
    reason: String,
  },
}

impl AnalysisFailure {
  /// POST 以外のメソッドの失敗を作成
  #[must_use]
  pub fn not_post(method: impl Into<String>) -> Self {
    Self::NotPost {
      method: method.into(),
    }
  }

  /// トークナイザーの失敗を作成
  #[must_use]
  pub fn tokenizer(reason: impl Into<String>) -> Self {
    Self::Tokenizer {
      reason: reason.into(),
    }
  }

  /// ボディ読み込みの失敗を作成
  #[must_use]
  pub fn body_read(reason: impl Into<String>) -> Self {
    Self::BodyRead {
      reason: reason.into(),
    }
  }

  /// レスポンスの `Status` 値
  #[must_use]
  pub fn status(&self) -> i32 {
    match self {
      Self::NotPost { .. } => 1,
      Self::JsonParse(_) => 2,
      Self::Tokenizer { .. } => 3,
      Self::BodyRead { .. } => 4,
    }
  }

  /// レスポンスの `Code` 値
  #[must_use]
  pub fn code(&self) -> String {
    match self {
      Self::NotPost { .. } => "Not POST method".to_string(),
      Self::JsonParse(_) => "JSON parse error.".to_string(),
      Self::Tokenizer { reason } => format!("Tokenizer error: {reason}"),
      Self::BodyRead { .. } => "Request body read error.".to_string(),
    }
  }
}

impl From<TokenizerError> for AnalysisFailure {
  fn from(err: TokenizerError) -> Self {
    Self::tokenizer(err.to_string())
  }
}
