pub mod demo;
pub mod info;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shelfr")]
#[command(version)]
#[command(about = "An in-memory library catalog.")]
pub struct CommandLine {
    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output; repeat to reduce it further
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a seeded catalog through every operation
    #[command(alias = "d")]
    Demo,
    /// Show information about this tool
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
