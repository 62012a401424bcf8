use anyhow::Result;
use tasktally::cli;
use std::env;

fn main() -> Result<()> {
    let args = cli::parse_args(env::args().skip(1))?;
    if args.help {
        cli::print_help("tasktally-chat");
        return Ok(());
    }

    let (config, controller) = cli::start(args.root)?;
    tasktally::tui::run(controller, config.show_welcome)
}
