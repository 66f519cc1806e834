use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Stderr logging. `RUST_LOG` wins over the command-line level.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = match (verbose, quiet) {
        (true, _) => "rubric_bandshift=debug",
        (false, true) => "rubric_bandshift=warn",
        (false, false) => "rubric_bandshift=info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init();
}
