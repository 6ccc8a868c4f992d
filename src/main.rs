use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_USAGE: i32 = 2;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Format {
    /// Aligned tables with headers (colored on a TTY)
    Table,
    /// Tab-separated values for scripting; requires --table
    Tsv,
    /// Both tables as one JSON document
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Table {
    Entrants,
    Schools,
}

#[derive(Parser, Debug)]
#[command(name = "sweeps")]
#[command(about = "Tournament sweepstakes standings CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// CSV file of tournament results
    /// (header: tournament, year, place, entry, school, elim_points)
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Print only one of the two standings tables
    /// (json output always carries both)
    #[arg(short, long, value_enum)]
    table: Option<Table>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // TSV is one flat table per run; make the caller pick which
    if cli.format == Format::Tsv && cli.table.is_none() {
        eprintln!("--format tsv prints a single table; pass --table entrants or --table schools");
        std::process::exit(EXIT_USAGE);
    }

    let rows = match sweeps::ingest::read_rows(&cli.input) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if cli.verbose {
        eprintln!("Read {} rows from {}", rows.len(), cli.input.display());
        let dropped = rows
            .iter()
            .filter(|row| sweeps::scoring::expand_row(row).is_empty())
            .count();
        if dropped > 0 {
            eprintln!("Dropped {} rows with missing required fields", dropped);
        }
    }

    let standings = sweeps::compute_standings(&rows);

    if cli.verbose {
        eprintln!(
            "{} tournaments, {} entrants, {} schools",
            standings.tournaments.len(),
            standings.entrants.len(),
            standings.schools.len()
        );
    }

    match cli.format {
        Format::Table => {
            let use_colors = sweeps::output::should_use_colors();
            let both = cli.table.is_none();
            if cli.table != Some(Table::Schools) {
                if both {
                    println!("Entrant Standings:");
                }
                println!(
                    "{}",
                    sweeps::output::format_entrant_table(
                        &standings.entrants,
                        &standings.tournaments,
                        use_colors
                    )
                );
            }
            if cli.table != Some(Table::Entrants) {
                if both {
                    println!();
                    println!("School Standings:");
                }
                println!(
                    "{}",
                    sweeps::output::format_school_table(
                        &standings.schools,
                        &standings.tournaments,
                        use_colors
                    )
                );
            }
        }
        Format::Tsv => {
            let output = match cli.table {
                Some(Table::Entrants) => sweeps::output::format_entrant_tsv(
                    &standings.entrants,
                    &standings.tournaments,
                ),
                _ => sweeps::output::format_school_tsv(
                    &standings.schools,
                    &standings.tournaments,
                ),
            };
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Format::Json => match sweeps::output::format_json(&standings) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize standings: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        },
    }

    std::process::exit(EXIT_SUCCESS);
}
