//! Initializes the `tracing` subscriber for the `imgshare` binary:
//! environment-based filtering via `RUST_LOG`, with `-v`/`-vv` raising the
//! default floor when the environment variable isn't set. All output goes
//! to stderr, leaving stdout free for the tool's own human-facing messages.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber. Call exactly once, early in
/// `main()`.
///
/// `verbosity` is the `-v` repeat count from the CLI: `0` -> `warn`, `1` ->
/// `debug`, `2+` -> `trace`. `RUST_LOG`, when set, always wins.
pub fn init_logging(verbosity: u8) {
  let default_level = match verbosity {
    0 => "warn",
    1 => "imgshare=debug,imgshare_cli=debug",
    _ => "imgshare=trace,imgshare_cli=trace",
  };
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::registry()
    .with(env_filter)
    .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
    .init();
}
