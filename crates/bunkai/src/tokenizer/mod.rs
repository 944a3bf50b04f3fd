//! tokenizer モジュール
pub mod sentence_tokenizer;
pub mod vibrato_tokenizer;

/// 再エクスポート
pub use sentence_tokenizer::{SentenceTokenizer, format_token};
pub use vibrato_tokenizer::{MAX_SENTENCE_CHARS, VibratoTokenizer};
