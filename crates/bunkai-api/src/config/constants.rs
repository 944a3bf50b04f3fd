//! API設定の定数定義

/// デフォルトの待ち受けポート
pub const DEFAULT_PORT: u16 = 80;

/// デフォルトのバインドホスト
///
/// 全インターフェースで待ち受ける。
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// デフォルトの辞書プリセット名
///
/// IPADIC は MeCab 互換の素性文字列を返す。
pub const DEFAULT_PRESET_DICT: &str = "ipadic";

/// リクエストボディの最大長（バイト単位）
///
/// 10MB までのボディを許可する。
pub const MAX_BODY_BYTES: usize = 10_000_000;

/// リクエストボディ読み込みのタイムアウト（ミリ秒）
pub const DEFAULT_BODY_TIMEOUT_MS: u64 = 30_000;

/// 形態素解析のタイムアウト（ミリ秒）
pub const DEFAULT_TOKENIZE_TIMEOUT_MS: u64 = 30_000;
