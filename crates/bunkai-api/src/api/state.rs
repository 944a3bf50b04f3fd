//! API State Definition

use std::sync::Arc;

use bunkai::tokenizer::SentenceTokenizer;

use crate::config::Config;
use crate::service::AnalysisService;

/// Application State
///
/// State shared across the entire server. Immutable after startup;
/// nothing here is written by request handling.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Morphological Analysis Service
  pub service: AnalysisService,
}

impl AppState {
  /// Creates a new AppState
  ///
  /// - Production: `build_tokenizer(&config)?`
  /// - Test: `Arc::new(StubTokenizer)`
  #[must_use]
  pub fn new(config: Config, tokenizer: Arc<dyn SentenceTokenizer>) -> Self {
    let service = AnalysisService::new(tokenizer, config.tokenize_timeout);
    Self { config, service }
  }
}
