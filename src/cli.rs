use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "relaybot")]
#[command(author, version, about = "Telegram bot that relays verified submissions to fixed channels", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot with long polling (default)
    Run,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
