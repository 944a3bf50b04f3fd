//! Morphological Analysis Service

use std::sync::Arc;
use std::time::Duration;

use bunkai::tokenizer::{SentenceTokenizer, VibratoTokenizer};
use tracing::error;

use crate::config::Config;
use crate::errors::{AnalysisFailure, Result};

/// Runs the tokenizer off the async runtime with a deadline.
///
/// The tokenizer itself is any `SentenceTokenizer`:
/// - Production: `VibratoTokenizer` built by [`build_tokenizer`]
/// - Test: stubs that need no dictionary
#[derive(Clone)]
pub struct AnalysisService {
  tokenizer: Arc<dyn SentenceTokenizer>,
  timeout: Duration,
}

impl AnalysisService {
  /// Creates the service
  #[must_use]
  pub fn new(tokenizer: Arc<dyn SentenceTokenizer>, timeout: Duration) -> Self {
    Self { tokenizer, timeout }
  }

  /// Tokenizes `sentence` on the blocking pool.
  ///
  /// Morphological analysis is CPU bound, so it is kept off the async worker threads.
  /// A call that outlives the deadline keeps running on its blocking thread;
  /// only its result is dropped.
  ///
  /// # Errors
  /// `AnalysisFailure::Tokenizer` when the tokenizer fails, panics, or times out.
  pub async fn tokenize(&self, sentence: String) -> std::result::Result<Vec<String>, AnalysisFailure> {
    let tokenizer = Arc::clone(&self.tokenizer);
    let task = tokio::task::spawn_blocking(move || tokenizer.tokenize(&sentence));

    match tokio::time::timeout(self.timeout, task).await {
      Ok(Ok(Ok(tokens))) => Ok(tokens),
      Ok(Ok(Err(e))) => Err(e.into()),
      Ok(Err(join_error)) => {
        error!(error = %join_error, "spawn_blocking error");
        Err(AnalysisFailure::tokenizer("tokenizer task aborted"))
      }
      Err(_) => Err(AnalysisFailure::tokenizer(format!(
        "timed out after {} ms",
        self.timeout.as_millis()
      ))),
    }
  }
}

/// Builds the production tokenizer from the dictionary settings
///
/// Loads the dictionary (downloading a preset dictionary on first use).
///
/// # Errors
/// Returns an error if the dictionary config is invalid or the dictionary cannot be loaded
pub fn build_tokenizer(config: &Config) -> Result<Arc<dyn SentenceTokenizer>> {
  let tokenizer = VibratoTokenizer::from_config(&config.dictionary)?;
  Ok(Arc::new(tokenizer))
}
