//! Config module

mod cli;
mod constants;
mod env;

pub use cli::Cli;
pub use constants::{
  DEFAULT_BIND_HOST, DEFAULT_BODY_TIMEOUT_MS, DEFAULT_PORT, DEFAULT_PRESET_DICT,
  DEFAULT_TOKENIZE_TIMEOUT_MS, MAX_BODY_BYTES,
};
pub use env::Config;
