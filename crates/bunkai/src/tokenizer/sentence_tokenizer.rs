//! Tokenizer interface consumed by the HTTP layer

use crate::errors::TokenizerError;

/// Segments one sentence into analyzed units.
///
/// Each returned string is one unit (surface form plus whatever annotation
/// the implementation embeds), in emission order. An empty sentence yields an
/// empty vector.
///
/// Implementations must be `Send + Sync` so that a single instance can be
/// shared across requests behind an `Arc`.
pub trait SentenceTokenizer: Send + Sync {
  /// Tokenizes `sentence`.
  ///
  /// # Errors
  /// Returns a `TokenizerError` if the sentence cannot be analyzed.
  fn tokenize(&self, sentence: &str) -> Result<Vec<String>, TokenizerError>;
}

/// Formats one analyzed unit as a MeCab-style line: `surface<TAB>feature`.
pub fn format_token(surface: &str, feature: &str) -> String {
  let mut line = String::with_capacity(surface.len() + feature.len() + 1);
  line.push_str(surface);
  line.push('\t');
  line.push_str(feature);
  line
}
