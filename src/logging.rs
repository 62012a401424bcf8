// Routes the `log` macros to a file in the data directory. The terminal is
// reserved for the conversation itself.
use crate::context::AppContext;
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;

pub fn init(ctx: &dyn AppContext, level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let path = ctx.get_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();

    // A logger may already be installed (e.g. several sessions in one process).
    if WriteLogger::init(level, config, file).is_err() {
        log::debug!("Logger already initialised");
    }
    Ok(())
}
