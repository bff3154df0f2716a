//! Logger installation

/// Map a `-v` count to a default filter level
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install `env_logger` unless quiet; `RUST_LOG` still overrides the level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let env = env_logger::Env::default().default_filter_or(level_for(verbose));
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already installed");
    }
}
