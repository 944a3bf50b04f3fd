//! bunkai 形態素解析ライブラリー
//!
//! 文を形態素単位の文字列列に分割するトークナイザーのインターフェースと、
//! vibrato-rkyv を用いたその実装を提供する

/// 設定モジュール - DictionaryConfig, DictionaryPreset を定義
pub mod config;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - BunkaiError, BunkaiResult等のエラー型を定義
pub mod errors;

/// トークナイザーモジュール - SentenceTokenizer と vibrato-rkyv による実装
pub mod tokenizer;

/// 再エクスポート
pub use config::{DictionaryConfig, DictionaryPreset};
pub use errors::{BunkaiError, BunkaiResult};
pub use tokenizer::{SentenceTokenizer, VibratoTokenizer};
