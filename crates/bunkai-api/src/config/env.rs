//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use bunkai::config::{DictionaryConfig, DictionaryPreset};

use super::constants::{
  DEFAULT_BIND_HOST, DEFAULT_BODY_TIMEOUT_MS, DEFAULT_PRESET_DICT, DEFAULT_TOKENIZE_TIMEOUT_MS,
  MAX_BODY_BYTES,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:80")
  pub bind_addr: String,
  /// Dictionary used by the tokenizer
  pub dictionary: DictionaryConfig,
  /// Deadline for reading the whole request body
  pub body_read_timeout: Duration,
  /// Deadline for one tokenizer call
  pub tokenize_timeout: Duration,
  /// Request body size cap (bytes)
  pub max_body_bytes: usize,
}

impl Config {
  /// Loads configuration from environment variables; the port comes from the command line.
  ///
  /// | variable | default |
  /// |---|---|
  /// | `BUNKAI_BIND_HOST` | `0.0.0.0` |
  /// | `BUNKAI_PRESET_DICT` | `ipadic` |
  /// | `BUNKAI_DICT_PATH` | unset |
  /// | `BUNKAI_DICT_CACHE_DIR` | unset (OS cache dir) |
  /// | `BUNKAI_BODY_TIMEOUT_MS` | `30000` |
  /// | `BUNKAI_TOKENIZE_TIMEOUT_MS` | `30000` |
  /// | `BUNKAI_MAX_BODY_BYTES` | `10000000` |
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env(port: u16) -> crate::errors::Result<Self> {
    Self::from_lookup(port, |key| std::env::var(key).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  ///
  /// `std::env::remove_var` is unsafe in Rust 2024, so tests feed a map through this instead.
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed
  pub fn from_lookup<F>(port: u16, lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let host = lookup("BUNKAI_BIND_HOST").unwrap_or_else(|| DEFAULT_BIND_HOST.to_string());
    let bind_addr = format!("{host}:{port}");

    let preset_str = lookup("BUNKAI_PRESET_DICT").unwrap_or_else(|| DEFAULT_PRESET_DICT.to_string());
    let preset = DictionaryPreset::from_str(&preset_str).map_err(|e| ApiError::config(e.to_string()))?;

    let dictionary = DictionaryConfig {
      preset,
      cache_dir: lookup("BUNKAI_DICT_CACHE_DIR").filter(|s| !s.is_empty()).map(PathBuf::from),
      local_path: lookup("BUNKAI_DICT_PATH").filter(|s| !s.is_empty()).map(PathBuf::from),
    };

    let body_read_timeout = Duration::from_millis(parse_number(
      &lookup,
      "BUNKAI_BODY_TIMEOUT_MS",
      DEFAULT_BODY_TIMEOUT_MS,
    )?);
    let tokenize_timeout = Duration::from_millis(parse_number(
      &lookup,
      "BUNKAI_TOKENIZE_TIMEOUT_MS",
      DEFAULT_TOKENIZE_TIMEOUT_MS,
    )?);
    let max_body_bytes = parse_number(&lookup, "BUNKAI_MAX_BODY_BYTES", MAX_BODY_BYTES)?;

    Ok(Self {
      bind_addr,
      dictionary,
      body_read_timeout,
      tokenize_timeout,
      max_body_bytes,
    })
  }
}

/// Parses a positive integer variable, falling back to `default` when unset
fn parse_number<F, T>(lookup: &F, key: &str, default: T) -> crate::errors::Result<T>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr + PartialEq + Default,
{
  let Some(raw) = lookup(key) else {
    return Ok(default);
  };

  match raw.trim().parse::<T>() {
    Ok(value) if value != T::default() => Ok(value),
    _ => Err(ApiError::config(format!(
      "{key} must be a positive integer: {raw:?}"
    ))),
  }
}
