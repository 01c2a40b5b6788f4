//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with scan results on stdout.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Crates whose level follows `-v`; everything else stays at `warn`.
const OWN_CRATES: [&str; 3] = ["pushlog_cli", "pushlog_core", "pushlog_github"];

/// Filter directives for a given `-v` count.
#[must_use]
pub fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    std::iter::once("warn".to_string())
        .chain(OWN_CRATES.iter().map(|krate| format!("{krate}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
