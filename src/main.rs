use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;

use splitrs::{export, import, logging, prep_data, PreparedTable, UnitConstants};

/// splitrs - Marathon Split Pace Analysis CLI
///
/// Converts raw checkpoint timing tables into per-runner pacing statistics:
/// segment paces, variability metrics, and pace-trend slopes.
#[derive(Parser)]
#[command(name = "splitrs")]
#[command(version = "0.1.0")]
#[command(about = "Marathon split pace analysis", long_about = None)]
struct Cli {
    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare the enriched split table from raw checkpoint times
    Prepare {
        /// Input CSV of H:MM:SS checkpoint times
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "csv")]
        format: OutputFormat,
    },

    /// Print a formatted summary of the prepared table
    Summary {
        /// Input CSV of H:MM:SS checkpoint times
        #[arg(short, long)]
        input: PathBuf,

        /// Number of rows to display
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
}

fn prepare_from(input: &Path, units: &UnitConstants) -> Result<PreparedTable> {
    let records = import::read_csv(input)
        .with_context(|| format!("reading {}", input.display()))?;
    Ok(prep_data(&records, units))
}

fn report_drops(table: &PreparedTable) {
    let dropped = table.dropped_missing + table.dropped_negative;
    if dropped > 0 {
        eprintln!(
            "{} {} row(s) dropped ({} missing data, {} negative pace)",
            "warning:".yellow().bold(),
            dropped,
            table.dropped_missing,
            table.dropped_negative
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    let units = UnitConstants::default();

    match cli.command {
        Commands::Prepare {
            input,
            output,
            format,
        } => {
            let table = prepare_from(&input, &units)?;

            let mut writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(
                    File::create(path).with_context(|| format!("creating {}", path.display()))?,
                ),
                None => Box::new(io::stdout()),
            };
            match format {
                OutputFormat::Csv => export::write_csv(&mut writer, &table)?,
                OutputFormat::Json => export::write_json(&mut writer, &table)?,
            }

            report_drops(&table);
            eprintln!(
                "{} prepared {} runner(s)",
                "done:".green().bold(),
                table.rows.len()
            );
        }

        Commands::Summary { input, limit } => {
            let table = prepare_from(&input, &units)?;
            println!("{}", export::pretty_table(&table, limit));

            let negative_splits = table
                .rows
                .iter()
                .filter(|row| row.halves.second_half_faster)
                .count();
            let sub_four = table
                .rows
                .iter()
                .filter(|row| row.halves.below_four_hours)
                .count();
            println!(
                "{} runners, {} negative-split, {} under four hours",
                table.rows.len().to_string().bold(),
                negative_splits,
                sub_four
            );
            report_drops(&table);
        }
    }

    Ok(())
}
