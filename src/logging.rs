use env_logger::Env;

/// Installs the process logger. Called once from each binary's `main`; `RUST_LOG` wins over
/// `verbose`.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}
