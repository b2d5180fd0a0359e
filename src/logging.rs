use anyhow::anyhow;
use log::{LevelFilter, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::settings::Settings;

/// Sends log lines for this crate to stderr at `level`.
pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    let config = ConfigBuilder::new()
        .add_filter_allow_str(env!("CARGO_PKG_NAME"))
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .map_err(|e| anyhow!("could not install logger: {e}"))?;
    Ok(())
}

pub fn startup(settings: &Settings) {
    info!(
        "starting {} {}x{} on {}{}",
        settings.window_title,
        settings.window_size,
        settings.window_size,
        settings.difficulty.name(),
        settings.seed.map(|s| format!(", seed {s}")).unwrap_or_default()
    );
}
