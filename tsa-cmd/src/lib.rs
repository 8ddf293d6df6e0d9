//! Command implementations for the TSA CLI.
//!
//! Each subcommand loads the dataset once, runs the same aggregation the
//! browser pages run, and prints the result as an aligned table, JSON or CSV.

use clap::{Args, Subcommand};

pub mod input;
pub mod output;
pub mod report;

pub use output::OutputFormat;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Dataset path or http(s) URL; a `.gz` suffix is decompressed
    #[arg(short, long, default_value = "data/Kaggle_TwitterUSAirlineSentiment.csv")]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count tweets per (airline, sentiment) and show bubble sizes
    Bubbles {
        /// Only show bubbles for this airline ("all" shows every airline)
        #[arg(short, long, default_value = "all")]
        airline: String,

        /// Seed for the random start positions
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the first rows sorted by ascending sentiment confidence
    Filtered {
        /// Number of rows taken from the top of the file
        #[arg(short, long, default_value_t = 40)]
        limit: usize,
    },

    /// Click headers of the sortable table, in order, and show the result
    Sort {
        /// Column to activate; repeat to activate several times
        #[arg(short, long = "column", required = true)]
        columns: Vec<String>,

        /// Only print the first N rows
        #[arg(long)]
        head: Option<usize>,
    },

    /// Record count, airlines, sentiments and date span
    Summary,
}

pub async fn run(options: GlobalOptions, command: Command) -> anyhow::Result<()> {
    let dataset = input::load_dataset(&options.input).await?;
    let table = match command {
        Command::Bubbles { airline, seed } => report::bubbles(&dataset, &airline, seed)?,
        Command::Filtered { limit } => report::filtered(&dataset, limit)?,
        Command::Sort { columns, head } => report::sorted(&dataset, &columns, head)?,
        Command::Summary => report::summary(&dataset)?,
    };
    let stdout = std::io::stdout();
    output::write_table(&mut stdout.lock(), &table, options.format)
}
