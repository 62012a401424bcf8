// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing, help text and
//! the startup sequence both binaries go through.
use crate::config::Config;
use crate::context::{AppContext, StandardContext};
use crate::controller::Controller;
use crate::logging;
use crate::model::Instruction;
use crate::storage::Storage;
use anyhow::{Result, bail};
use std::path::PathBuf;
use strum::IntoEnumIterator;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub help: bool,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => parsed.help = true,
            "-r" | "--root" => match args.next() {
                Some(path) => parsed.root = Some(PathBuf::from(path)),
                None => bail!("{} expects a directory", arg),
            },
            other => bail!("Unknown argument '{}'. See --help.", other),
        }
    }
    Ok(parsed)
}

/// Resolves config (writing the defaults on first run), starts file
/// logging and opens the save files.
pub fn start(root: Option<PathBuf>) -> Result<(Config, Controller)> {
    let ctx = StandardContext::new(root);
    let config = Config::load_or_default(&ctx)?;
    logging::init(&ctx, config.log_filter())?;
    let config_path = ctx.get_config_file_path()?;
    log::info!(
        "Starting tasktally v{} (config: {})",
        env!("CARGO_PKG_VERSION"),
        config_path.display()
    );
    // First run: write the defaults out so there is a file to edit.
    if !config_path.exists()
        && let Err(e) = config.save(&ctx)
    {
        log::warn!("Could not write default config: {:#}", e);
    }
    let storage = Storage::from_config(&ctx, &config)?;
    let controller = Controller::open(storage)?;
    Ok((config, controller))
}

pub fn print_help(binary_name: &str) {
    let is_chat = binary_name.contains("chat");

    println!(
        "Tasktally v{} - A small task and expense tracker ({})",
        env!("CARGO_PKG_VERSION"),
        if is_chat { "chat" } else { "console" }
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS:");
    for instruction in Instruction::iter() {
        println!("    {}", instruction.usage());
    }
    println!();
    println!("EXAMPLES:");
    println!("    TODO buy milk");
    println!("    DEADLINE return book /by 2024-01-01 18:00");
    println!("    EVENT team dinner /at 2024-02-02 19:00 /to 2024-02-02 22:00");
    println!("    EXPENSE 12.50 /dollars lunch /on 2024-01-03");
    println!("    DONE 2");
    println!("    FIND book");
    if is_chat {
        println!();
        println!("KEYS:");
        println!("    Enter: Send   PgUp/PgDn: Scroll   Esc: Quit");
    }
}
