use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use passbook_analysis::{
    CategoryFilter, FilterCriteria, Granularity, Ledger, group_by_period, income_list, recent,
    rollup_by_category, summarize, top_merchants,
};
use passbook_core::Transaction;
use passbook_ingest::parse_statement;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{info, warn};

mod config;
mod logging;
mod report;
mod state;

use config::Config;
use report::SummaryReport;

#[derive(Parser, Debug)]
#[command(
    name = "passbook",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PASSBOOK_BUILD_SHA"), ")"),
    about = "Bank statement ledger: classified transactions and spending breakdowns"
)]
struct Cli {
    /// Log filter (trace, debug, info, warn, error or a tracing directive)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct StatementArgs {
    /// Statement export to read (`-` for stdin)
    file: PathBuf,

    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Case-insensitive narration search
    #[arg(long, default_value = "")]
    search: String,

    /// Category label, or `all`
    #[arg(long, default_value = "all")]
    category: CategoryFilter,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl StatementArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::default()
            .between(self.from, self.to)
            .search(self.search.clone())
            .category(self.category)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Totals, statement date range and the categories present
    Summary(StatementArgs),

    /// Spending and income per day, week or month
    Periods {
        #[command(flatten)]
        args: StatementArgs,

        /// daily, weekly or monthly (default from config)
        #[arg(long)]
        granularity: Option<Granularity>,
    },

    /// Spending per category with percentage share
    Categories(StatementArgs),

    /// Biggest merchants by spending
    Merchants {
        #[command(flatten)]
        args: StatementArgs,

        /// How many merchants to show (default from config)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Credits, largest first
    Income(StatementArgs),

    /// First rows of the filtered view
    Recent {
        #[command(flatten)]
        args: StatementArgs,

        /// How many rows to show (default from config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Write the filtered view as CSV
    Export {
        #[command(flatten)]
        args: StatementArgs,

        /// Output path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Manage ~/.passbook/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

/// A loaded statement plus the view selected by the filter flags.
struct Loaded {
    ledger: Ledger,
    view: Vec<Transaction>,
    skipped: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    logging::init_logging(cli.log_level.as_deref(), &cfg.logging.level);

    match cli.command {
        Command::Summary(args) => {
            let Some(loaded) = load(&args).await? else {
                return Ok(());
            };
            let summary = summarize(&loaded.view);
            let categories = loaded.ledger.categories();
            let report = SummaryReport {
                summary: &summary,
                date_range: loaded.ledger.date_bounds(),
                categories: &categories,
                skipped_rows: loaded.skipped,
            };
            if args.json {
                report::print_json(&report)?;
            } else {
                report::print_summary(&report);
            }
        }

        Command::Periods { args, granularity } => {
            let Some(loaded) = load(&args).await? else {
                return Ok(());
            };
            let buckets = group_by_period(&loaded.view, granularity.unwrap_or(cfg.report.granularity));
            if args.json {
                report::print_json(&buckets)?;
            } else {
                report::print_periods(&buckets);
            }
        }

        Command::Categories(args) => {
            let Some(loaded) = load(&args).await? else {
                return Ok(());
            };
            let rollups = rollup_by_category(&loaded.view);
            if args.json {
                report::print_json(&rollups)?;
            } else {
                report::print_categories(&rollups);
            }
        }

        Command::Merchants { args, top } => {
            let Some(loaded) = load(&args).await? else {
                return Ok(());
            };
            let rollups = top_merchants(&loaded.view, top.unwrap_or(cfg.report.top_merchants));
            if args.json {
                report::print_json(&rollups)?;
            } else {
                report::print_merchants(&rollups);
            }
        }

        Command::Income(args) => {
            let Some(loaded) = load(&args).await? else {
                return Ok(());
            };
            let income = income_list(&loaded.view);
            if args.json {
                report::print_json(&income)?;
            } else {
                report::print_transactions(&income);
            }
        }

        Command::Recent { args, limit } => {
            let Some(loaded) = load(&args).await? else {
                return Ok(());
            };
            let rows = recent(&loaded.view, limit.unwrap_or(cfg.report.recent_limit));
            if args.json {
                report::print_json(rows)?;
            } else {
                report::print_transactions(rows);
            }
        }

        Command::Export { args, out } => {
            let Some(loaded) = load(&args).await? else {
                return Ok(());
            };
            export(&loaded.view, out.as_deref())?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => show_config(&cfg)?,
        },
    }

    Ok(())
}

async fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("read statement from stdin")?;
        return Ok(text);
    }
    if !path.exists() {
        bail!("Statement not found: {}", path.display());
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read {}", path.display()))
}

/// Read, parse and filter a statement. `None` means nothing usable was in it.
async fn load(args: &StatementArgs) -> Result<Option<Loaded>> {
    let text = read_document(&args.file).await?;
    let parsed = parse_statement(&text);
    let skipped = parsed.skipped.len();
    for row in &parsed.skipped {
        info!(line = row.line, reason = %row.reason, "row skipped");
    }

    let ledger = Ledger::from(parsed);
    if ledger.is_empty() {
        warn!(file = %args.file.display(), "no transactions found");
        eprintln!("No transactions found in {}", args.file.display());
        return Ok(None);
    }

    let view = ledger.filter(&args.criteria());
    Ok(Some(Loaded {
        ledger,
        view,
        skipped,
    }))
}

fn export(view: &[Transaction], out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            report::write_csv(view, file)?;
            eprintln!("Wrote {} rows to {}", view.len(), path.display());
        }
        None => report::write_csv(view, std::io::stdout().lock())?,
    }
    Ok(())
}

fn show_config(cfg: &Config) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg).context("serialize config")?);
    Ok(())
}
