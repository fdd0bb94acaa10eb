//! Command-line argument structure for the `imgshare` binary, using `clap`'s
//! derive API. The two modes (`-d` distribute, `-r` recover) share most of
//! their flags, so this is a flat struct with mode-specific fields left
//! optional rather than a `Subcommand` split — matching the reference
//! tool's single-getopt-loop shape more closely than a subcommand tree
//! would.

use std::path::PathBuf;

use clap::Parser;

/// Shamir (k, n) visual secret sharing for 8-bit grayscale BMPs.
#[derive(Parser, Debug)]
#[command(name = "imgshare", about = "Split or recover a secret BMP via (k, n) threshold sharing", version)]
pub struct Cli {
  /// Distribute mode: split `--secret` into `n` shadows embedded in the
  /// carriers found under `--dir`.
  #[arg(short = 'd', conflicts_with = "recover")]
  pub distribute: bool,

  /// Recover mode: reconstruct a secret from `k` shadow-bearing carriers
  /// found under `--dir`.
  #[arg(short = 'r', conflicts_with = "distribute")]
  pub recover: bool,

  /// Input secret path (distribute) or output secret path (recover).
  #[arg(long)]
  pub secret: PathBuf,

  /// Threshold: how many shadows are required to recover the secret.
  #[arg(short = 'k', value_name = "K")]
  pub k: u16,

  /// Number of shadows to produce (distribute only). Defaults to the count
  /// of regular `.bmp` files found in `--dir`.
  #[arg(short = 'n', value_name = "N")]
  pub n: Option<u16>,

  /// Width of the original secret, in pixels (recover only).
  #[arg(short = 'w', value_name = "WIDTH")]
  pub width: Option<u32>,

  /// Height of the original secret, in pixels (recover only).
  #[arg(short = 'h', value_name = "HEIGHT")]
  pub height: Option<i32>,

  /// PRNG seed used for the optional pixel-diffusion pass.
  #[arg(short = 's', default_value_t = 691)]
  pub seed: u16,

  /// Enable the opt-in pixel-diffusion permutation pass (off by default,
  /// matching the reference's shipped behavior).
  #[arg(long)]
  pub permute: bool,

  /// Directory holding carrier BMPs (distribute) or shadow BMPs (recover).
  #[arg(long, default_value = "./")]
  pub dir: PathBuf,

  /// Raise log verbosity. Repeatable: `-v` for debug, `-vv` for trace.
  #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
  pub verbose: u8,
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn verify_cli_structure() {
    Cli::command().debug_assert();
  }
}
