//! Shared `tracing` initialization used by all five binaries.

use tracing::Level;

/// Installs a `tracing-subscriber` fmt layer writing to stderr.
///
/// `verbose` raises the max level from `INFO` to `DEBUG`, matching the
/// `-v`/`--verbose` flag every binary exposes.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
