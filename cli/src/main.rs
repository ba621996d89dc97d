mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, info};
use shelfr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    if commands.no_color {
        colored::control::set_override(false);
    }

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info()
        }
        Commands::Demo => {
            print::header("getting the shelves ready", cfg.quiet);
            demo::run(&cfg)
        }
    }
}
