//! Errors module

mod error_definition;

pub use error_definition::{
  AnalysisFailure, ApiError, ApiErrorKind, CODE_OK, Result, STATUS_OK,
};
