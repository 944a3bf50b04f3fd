//! Service module

mod analysis_service;

pub use analysis_service::{AnalysisService, build_tokenizer};
