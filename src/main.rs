//! Command-line entry point for the slow-producer fixture.

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use argh::FromArgs;
use tracing_subscriber::EnvFilter;

use slowprod::{DEFAULT_DELAY_SECS, DEFAULT_NUM_LINES, Emission};

/// Emit a burst of identical lines to stdout, then the same line once more
/// byte-by-byte with a pause before each newline, then a second burst.
/// Simulates a slow producer for testing pipe readers and log collectors.
#[derive(Debug, FromArgs)]
struct Args {
    /// number of lines to write before and after the delayed line (default: 5)
    #[argh(positional, default = "DEFAULT_NUM_LINES")]
    num_lines: u64,

    /// seconds to pause before each newline of the delayed line (default: 5)
    #[argh(positional, default = "DEFAULT_DELAY_SECS")]
    delay: u64,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    initialize_tracing();

    if args.num_lines == 0 || args.delay == 0 {
        eprintln!("Usage: slowprod [<num_lines>] [<delay>]");
        eprintln!(
            "num_lines and delay must be nonzero (default delay: {DEFAULT_DELAY_SECS} seconds)"
        );
        std::process::exit(1);
    }

    let emission = Emission::new(args.num_lines, Duration::from_secs(args.delay));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emission
        .run(&mut out, |delay| {
            tracing::debug!(?delay, "pausing before newline");
            thread::sleep(delay);
        })
        .context("failed writing to stdout")?;

    Ok(())
}

/// Diagnostics go to stderr and stay silent unless `RUST_LOG` is set, so the
/// fixture's stdout byte stream is unaffected.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
