//! dictionary モジュール
pub mod dictionary_manager;

/// 再エクスポート
pub use dictionary_manager::DictionaryManager;
