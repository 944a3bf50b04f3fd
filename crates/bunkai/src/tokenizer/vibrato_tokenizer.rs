//! SentenceTokenizer backed by vibrato-rkyv

use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use super::sentence_tokenizer::{SentenceTokenizer, format_token};
use crate::config::DictionaryConfig;
use crate::dictionary::DictionaryManager;
use crate::errors::{BunkaiResult, TokenizerError};

/// Longest sentence (in characters) handed to the analyzer.
///
/// Lattice positions are stored as `u16`, so longer input cannot be analyzed.
pub const MAX_SENTENCE_CHARS: usize = u16::MAX as usize;

/// Japanese morphological tokenizer using vibrato-rkyv
///
/// - Stateless (only holds dictionary reference)
/// - `Clone + Send + Sync`
/// - One worker per call; workers are never shared between requests
#[derive(Clone)]
pub struct VibratoTokenizer {
  inner: VibratoImpl,
}

impl VibratoTokenizer {
  /// Constructs a tokenizer from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// Use this when the dictionary is shared via `Arc`, such as `DictionaryManager::load()`.
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use bunkai::dictionary::DictionaryManager;
  /// # use bunkai::tokenizer::VibratoTokenizer;
  /// # use vibrato_rkyv::dictionary::PresetDictionaryKind;
  /// let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
  /// let dict = manager.load().unwrap();
  /// let tokenizer = VibratoTokenizer::from_shared_dictionary(dict);
  /// ```
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
    }
  }

  /// Validates the config, loads (downloading on first use) the dictionary and
  /// builds the tokenizer.
  ///
  /// # Errors
  /// Returns an error if the config is invalid or the dictionary cannot be loaded.
  pub fn from_config(config: &DictionaryConfig) -> BunkaiResult<Self> {
    config.validate()?;

    let manager = DictionaryManager::from_config(config)?;
    debug!(?manager, "Loading dictionary");

    let dict = manager.load()?;
    Ok(Self::from_shared_dictionary(dict))
  }
}

impl SentenceTokenizer for VibratoTokenizer {
  fn tokenize(&self, sentence: &str) -> Result<Vec<String>, TokenizerError> {
    if sentence.is_empty() {
      return Ok(Vec::new());
    }

    let chars = sentence.chars().count();
    if chars > MAX_SENTENCE_CHARS {
      return Err(TokenizerError::SentenceTooLong {
        chars,
        max: MAX_SENTENCE_CHARS,
      });
    }

    // worker holds lattice for analysis and calculation area.
    // Created each time
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(sentence);
    worker.tokenize();

    let tokens: Vec<String> =
      worker.token_iter().map(|token| format_token(token.surface(), token.feature())).collect();

    debug!(
      sentence_chars = chars,
      total_tokens = tokens.len(),
      "Morphological analysis completed"
    );

    Ok(tokens)
  }
}
