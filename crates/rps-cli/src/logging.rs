use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Map the `-v` count to a level. Quiet by default.
pub fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a terminal logger on stderr so diagnostics stay out of the game transcript.
pub fn init(verbosity: u8) -> Result<(), String> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    TermLogger::init(
        level(verbosity),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| format!("failed to initialize logger: {e}"))
}
