//! Command-line front end over exported transaction documents.

pub mod output;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::{JsonPreferenceStore, PreferenceStore};
use crate::core::feed::{build_statistics_feed, render_feed, AD_INTERVAL};
use crate::core::services::{ServiceResult, Snapshot, SummaryService, TransactionService};
use crate::currency::Currency;
use crate::errors::ExpenseError;
use crate::utils::build_info;
use output::{styled, totals_lines, transaction_line, MessageKind, TextRenderer};

#[derive(Debug, Parser)]
#[command(name = "expense_core_cli", about = "Summarise exported income and expense records")]
pub struct Cli {
    /// Disable ANSI colours.
    #[arg(long, global = true)]
    pub plain: bool,

    /// Directory holding preferences.json (defaults to $EXPENSE_CORE_HOME or ~/.expense_core).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Totals, balance and the most recent transactions.
    Summary {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = crate::core::services::summary_service::HOME_RECENT_LIMIT)]
        recent: usize,
    },
    /// Category and monthly breakdown.
    Stats {
        #[command(flatten)]
        source: Source,
        /// Reserve ad slots between entries.
        #[arg(long)]
        ads: bool,
    },
    /// Transaction count and most used categories.
    Profile {
        #[command(flatten)]
        source: Source,
    },
    /// Show or change the display currency.
    Currency {
        #[arg(long)]
        set: Option<Currency>,
        /// List every supported currency.
        #[arg(long)]
        list: bool,
    },
    /// Print build metadata.
    Version,
}

#[derive(Debug, Args)]
pub struct Source {
    /// JSON array of transaction documents.
    #[arg(long)]
    pub file: PathBuf,
    /// Only records owned by this user are aggregated.
    #[arg(long)]
    pub owner: String,
    /// Display currency; defaults to the stored preference.
    #[arg(long)]
    pub currency: Option<Currency>,
}

/// Parses process arguments and runs against stdout.
pub fn run_cli() -> ServiceResult<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

pub fn run(cli: Cli, out: &mut impl Write) -> ServiceResult<()> {
    if cli.plain {
        colored::control::set_override(false);
    }
    let store = match &cli.data_dir {
        Some(dir) => JsonPreferenceStore::with_base_dir(dir),
        None => JsonPreferenceStore::from_env(),
    };

    match cli.command {
        Command::Summary { source, recent } => {
            let (snapshot, currency) = load(&source, &store)?;
            let home = SummaryService::home(snapshot.records(), recent);
            let title = format!("Summary for {}", snapshot.owner_id);
            write_line(out, &styled(MessageKind::Section, &title))?;
            for line in totals_lines(&home.totals, currency) {
                write_line(out, &line)?;
            }
            write_line(out, &styled(MessageKind::Section, "Recent transactions"))?;
            if home.recent.is_empty() {
                write_line(out, &styled(MessageKind::Info, "No transactions yet"))?;
            }
            for record in home.recent {
                write_line(out, &transaction_line(record, currency))?;
            }
            skipped_notice(out, &snapshot)
        }
        Command::Stats { source, ads } => {
            let (snapshot, currency) = load(&source, &store)?;
            let stats = SummaryService::statistics(snapshot.records());
            let feed = build_statistics_feed(&stats, ads.then_some(AD_INTERVAL));
            let mut renderer = TextRenderer { currency };
            for line in render_feed(&mut renderer, &stats.totals, &feed) {
                write_line(out, &line)?;
            }
            skipped_notice(out, &snapshot)
        }
        Command::Profile { source } => {
            let (snapshot, currency) = load(&source, &store)?;
            let profile = SummaryService::profile(snapshot.records());
            let title = format!("Profile for {}", snapshot.owner_id);
            write_line(out, &styled(MessageKind::Section, &title))?;
            write_line(out, &format!("Transactions: {}", profile.transaction_count))?;
            for line in totals_lines(&profile.totals, currency) {
                write_line(out, &line)?;
            }
            for (title, counts) in [
                ("Top expense categories", &profile.top_expense_categories),
                ("Top income categories", &profile.top_income_categories),
            ] {
                write_line(out, &styled(MessageKind::Section, title))?;
                for entry in counts {
                    write_line(out, &format!("  {} ({})", entry.category, entry.count))?;
                }
            }
            skipped_notice(out, &snapshot)
        }
        Command::Currency { set, list } => {
            if let Some(currency) = set {
                store.set_currency(currency)?;
                info!(currency = currency.key(), "display currency updated");
                let message = format!("Display currency set to {currency}");
                write_line(out, &styled(MessageKind::Success, &message))?;
            }
            let active = store.currency()?;
            if list {
                for currency in Currency::all() {
                    let marker = if *currency == active { "*" } else { " " };
                    write_line(
                        out,
                        &format!(
                            "{marker} {:<18} {:<3} {}  quick: {}",
                            currency.key(),
                            currency.symbol(),
                            currency.code(),
                            currency.quick_amounts().join(", ")
                        ),
                    )?;
                }
            } else if set.is_none() {
                let message = format!("Display currency: {active} [{}]", active.code());
                write_line(out, &message)?;
            }
            Ok(())
        }
        Command::Version => write_line(out, &build_info::current().to_string()),
    }
}

fn load(source: &Source, store: &impl PreferenceStore) -> ServiceResult<(Snapshot, Currency)> {
    let snapshot = read_snapshot(&source.file, &source.owner)?;
    let currency = match source.currency {
        Some(currency) => currency,
        None => store.currency()?,
    };
    Ok((snapshot, currency))
}

fn read_snapshot(path: &Path, owner: &str) -> ServiceResult<Snapshot> {
    let raw = fs::read_to_string(path).map_err(ExpenseError::from)?;
    TransactionService::ingest_json(owner, &raw)
}

fn skipped_notice(out: &mut impl Write, snapshot: &Snapshot) -> ServiceResult<()> {
    if snapshot.skipped > 0 {
        let message = format!("{} document(s) skipped", snapshot.skipped);
        write_line(out, &styled(MessageKind::Warning, &message))?;
    }
    Ok(())
}

fn write_line(out: &mut impl Write, line: &str) -> ServiceResult<()> {
    writeln!(out, "{line}").map_err(ExpenseError::from)?;
    Ok(())
}
