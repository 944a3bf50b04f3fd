//! Command line arguments

use clap::Parser;

use super::constants::DEFAULT_PORT;

/// Sentence analysis JSON API server
#[derive(Debug, Clone, Parser)]
#[command(name = "bunkai-api", version, about)]
pub struct Cli {
  /// Port to listen on
  #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
  pub port: u16,
}
