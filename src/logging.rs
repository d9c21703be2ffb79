use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for a given `-v` count
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "automv_launcher=warn",
        1 => "automv_launcher=info",
        2 => "automv_launcher=debug",
        _ => "automv_launcher=trace",
    }
}

/// Logs go to stderr so they never interleave with the progress lines on stdout.
/// `RUST_LOG` overrides the verbosity flags.
pub fn init_cli_logger(verbose: u8, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
