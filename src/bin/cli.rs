use anyhow::Result;
use tasktally::cli;
use tasktally::ui::{ConsoleUi, Ui};
use std::env;
use std::io;

fn main() -> Result<()> {
    let args = cli::parse_args(env::args().skip(1))?;
    if args.help {
        cli::print_help("tasktally");
        return Ok(());
    }

    let (config, mut controller) = cli::start(args.root)?;
    let mut ui = ConsoleUi::stdout();
    if config.show_welcome {
        ui.show_welcome();
    }
    controller.run(io::stdin().lock(), &mut ui)
}
