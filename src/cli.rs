use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "contest-bot")]
#[command(author, version, about = "Telegram bot that registers contest participants", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// List registered participants from the database
    Participants {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
