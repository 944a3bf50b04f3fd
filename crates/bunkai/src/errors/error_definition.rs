//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// 辞書設定（DictionaryConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// 不明なプリセット辞書名
  #[error("不明なプリセット辞書です: {name} (有効な値: ipadic, unidic-cwj, unidic-csj)")]
  UnknownPreset {
    /// 指定された名前
    name: String,
  },

  /// dictionary.cache_dir が「存在するディレクトリ」でない（ファイルである等）
  #[error("dictionary.cache_dir がディレクトリではありません: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// dictionary.cache_dir の作成に失敗
  #[error("dictionary.cache_dir の作成に失敗しました: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },
}

/// 辞書関連のエラー
/// Vibrato では ipadic, unidic 等の辞書を使用可能
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// 辞書パスが不正または辞書種別が不正
  #[error("辞書パスまたは辞書種別が不正です: path={0}, preset_kind={1:?}")]
  InvalidPathOrInvalidPresetKind(PathBuf, Option<PresetDictionaryKind>),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// トークナイザー関連エラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TokenizerError {
  /// 辞書起因のエラー
  #[error("辞書エラー: {0}")]
  Dictionary(#[from] DictionaryError),

  /// 文が長すぎる（ラティスの上限を超える）
  #[error("文が長すぎます: {chars} 文字（最大: {max} 文字）")]
  SentenceTooLong {
    /// 実際の文字数
    chars: usize,
    /// 許容される最大文字数
    max: usize,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `BunkaiResult<T>` = `Result<T, BunkaiError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum BunkaiError {
  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// トークナイザー関連エラー
  #[error(transparent)]
  Tokenizer(#[from] TokenizerError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// bunkai クレートの標準 Result 型エイリアス
pub type BunkaiResult<T> = Result<T, BunkaiError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sentence_too_long_message_contains_sizes() {
    let err = TokenizerError::SentenceTooLong {
      chars: 70_000,
      max: 65_535,
    };
    let msg = err.to_string();
    assert!(msg.contains("70000"));
    assert!(msg.contains("65535"));
  }

  #[test]
  fn bunkai_error_is_transparent_over_tokenizer_error() {
    let inner = TokenizerError::SentenceTooLong { chars: 2, max: 1 };
    let expected = inner.to_string();
    let err: BunkaiError = inner.into();
    assert_eq!(err.to_string(), expected);
  }

  #[test]
  fn dictionary_error_converts_into_tokenizer_error() {
    let err: TokenizerError = DictionaryError::CacheDirNotFound.into();
    assert!(matches!(
      err,
      TokenizerError::Dictionary(DictionaryError::CacheDirNotFound)
    ));
  }
}
