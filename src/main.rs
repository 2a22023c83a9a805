use anyhow::{Context, Result};
use walletview::cli::{Args, Command};
use walletview::config::Config;
use walletview::dashboard::{BalanceSnapshot, DashboardSummary, account_title};
use walletview::tiles::{Columns, chunk_with};

fn main() -> Result<()> {
    let args = Args::parse_args();
    walletview::logging::init(args.verbose)?;

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Tiles { columns, items } => {
            let columns = match columns {
                Some(raw) => Columns::new(raw)?,
                None => config.tiles.columns()?,
            };
            let partition = chunk_with(items, columns);
            tracing::info!(
                columns = %columns,
                rows = partition.row_count(),
                "laid out tiles"
            );
            println!("{}", serde_json::to_string_pretty(&partition)?);
        }
        Command::Summary {
            balances,
            tab,
            account,
        } => {
            let snapshot = BalanceSnapshot::from_file(&balances)?;
            let summary = DashboardSummary::compute(&snapshot)
                .context("Failed to total balances")?;
            let headline = summary.headline(tab, &config.display);
            let (available_weight, staked_weight) = summary.chart_weights();

            println!("{}", account_title(account.as_deref(), &config.display));
            println!("{}: {}", headline.label, headline.figure);
            println!(
                "Chart weights:        available {:.2} / staked {:.2}",
                available_weight, staked_weight
            );
        }
    }

    Ok(())
}
