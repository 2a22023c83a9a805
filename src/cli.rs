use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::dashboard::TabStatus;

#[derive(Parser, Debug)]
#[command(name = "walletview")]
#[command(version)]
#[command(about = "Grid tiling and balance totals for wallet dashboards")]
pub struct Args {
    /// JSON config file (tiles and display settings)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lay items out in rows and print the partition as JSON
    Tiles {
        /// Columns per row (defaults to the config value)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        columns: Option<i64>,

        /// Items to lay out, in order
        items: Vec<String>,
    },

    /// Print dashboard totals for a balances file
    Summary {
        /// JSON file with `balances`, `delegations` and `unbondings`
        #[arg(short, long)]
        balances: PathBuf,

        /// Tab whose total is shown as the headline
        #[arg(short, long, value_enum, default_value_t = TabStatus::Available)]
        tab: TabStatus,

        /// Selected account name for the title
        #[arg(long)]
        account: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
