mod input;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use filing_core::db::{DbConfig, FactoryRegistry};
use filing_core::{
    HistoryRepository, NewCalculationRecord, RebateInput, TaxCalculationInput, compute_rebate,
    compute_tax,
};
use filing_db_sqlite::SqliteHistoryFactory;

use crate::input::{parse_currency, parse_filing_status};
use crate::report::{history_report, rebate_report, tax_report};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tax filing calculators: bracket income tax and the Recovery Rebate
/// Credit, with a local calculation history.
#[derive(Debug, Parser)]
#[command(name = "filing-tool", version)]
struct Cli {
    /// History storage backend to use.
    #[arg(long, default_value = "sqlite")]
    backend: String,

    /// Storage connection string.
    /// For SQLite this is a file path (e.g. `history.db`) or `:memory:`.
    #[arg(long, default_value = "history.db")]
    db: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute income tax from the bracket tables and save the result to
    /// history.
    Tax {
        /// Gross income, e.g. `75000` or `$75,000`.
        #[arg(long)]
        gross_income: String,

        /// Filing status: single, joint, separate, head, or widow.
        #[arg(long)]
        status: String,

        /// Number of dependents.
        #[arg(long, default_value_t = 0)]
        dependents: u32,

        /// Itemized deductions; the standard deduction is used if larger.
        #[arg(long, default_value = "0")]
        itemized_deductions: String,

        /// Do not write this calculation to history.
        #[arg(long, default_value_t = false)]
        no_save: bool,
    },

    /// Compute the Recovery Rebate Credit.
    Rebate {
        /// Filing status: single, joint, separate, head, or widow.
        #[arg(long)]
        status: String,

        /// Adjusted gross income.
        #[arg(long)]
        agi: String,

        /// Number of dependents.
        #[arg(long, default_value_t = 0)]
        dependents: u32,

        /// Stimulus payment already received, if any.
        #[arg(long)]
        received_amount: Option<String>,
    },

    /// Show the stored calculation history, newest first.
    History {
        /// Delete every stored calculation instead of listing.
        #[arg(long, default_value_t = false)]
        clear: bool,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── wiring ──────────────────────────────────────────────────────────────────

fn build_registry() -> FactoryRegistry {
    let mut registry = FactoryRegistry::new();
    registry.register(Box::new(SqliteHistoryFactory));
    registry
}

async fn open_repository(config: &DbConfig) -> Result<Box<dyn HistoryRepository>> {
    debug!("connecting to {} backend", config.backend);
    Ok(build_registry().create(config).await?)
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let db_config = DbConfig {
        backend: cli.backend,
        connection_string: cli.db,
    };

    match cli.command {
        Command::Tax {
            gross_income,
            status,
            dependents,
            itemized_deductions,
            no_save,
        } => {
            let input = TaxCalculationInput {
                gross_income: parse_currency(&gross_income)?,
                filing_status: parse_filing_status(&status)?,
                dependents,
                itemized_deductions: parse_currency(&itemized_deductions)?,
            };

            let result = compute_tax(&input);
            print!("{}", tax_report(&input, &result));

            if !no_save {
                let repo = open_repository(&db_config).await?;
                let record = repo
                    .append(NewCalculationRecord {
                        filing_status: input.filing_status,
                        gross_income: input.gross_income,
                        dependents: input.dependents,
                        itemized_deductions: input.itemized_deductions,
                        taxable_income: result.taxable_income,
                        tax_liability: result.tax_liability,
                        effective_rate: result.effective_rate,
                    })
                    .await?;
                info!(id = record.id, "calculation saved to history");
            }
        }

        Command::Rebate {
            status,
            agi,
            dependents,
            received_amount,
        } => {
            let received = received_amount.as_deref().map(parse_currency).transpose()?;
            let input = RebateInput {
                filing_status: parse_filing_status(&status)?,
                adjusted_gross_income: parse_currency(&agi)?,
                dependents,
                received_payment: received.is_some(),
                received_amount: received.unwrap_or_default(),
            };

            let result = compute_rebate(&input);
            print!("{}", rebate_report(&input, &result));
        }

        Command::History { clear } => {
            let repo = open_repository(&db_config).await?;
            if clear {
                repo.clear().await?;
                info!("calculation history cleared");
            } else {
                let records = repo.recent().await?;
                print!("{}", history_report(&records));
            }
        }
    }

    Ok(())
}
