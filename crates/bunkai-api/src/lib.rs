//! bunkai-api crate
//!
//! Web server exposing sentence morphological analysis as a single JSON endpoint.
//!
//! ## Endpoint
//! Every path accepts `POST` with `{"Token": "...", "Sentence": "..."}` and answers
//! `{"Status": 0, "Code": "OK", "Result": [...]}`. Failures are reported in
//! `Status` / `Code`; the HTTP status is always 200.
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:80/ \
//!   -H "Content-Type: application/json" \
//!   -d '{"Token": "01234", "Sentence": "すもももももももものうち"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::{Cli, Config};
pub use errors::{AnalysisFailure, ApiError, ApiErrorKind};
pub use models::{AnalysisRequest, AnalysisResponse};
pub use service::AnalysisService;
