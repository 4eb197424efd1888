use std::fs::File;
use std::io::{self, BufRead, Write as IoWrite};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use crate::application::RentalService;
use crate::domain::{PersonId, format_cents};
use crate::io::Exporter;

/// Librio - Book Rental Ledger
#[derive(Parser)]
#[command(name = "librio")]
#[command(about = "An in-memory book rental ledger with monthly reservation statistics")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the book catalog
    Books,

    /// List known persons
    Persons,

    /// Reserve a book for a person
    Reserve {
        /// Person id
        person: PersonId,

        /// Book title
        title: String,

        /// Number of rental days
        #[arg(short, long, default_value = "1")]
        days: u32,

        /// Start date (ISO 8601 format: YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show reservations for a person
    Reservations {
        /// Person id
        person: PersonId,
    },

    /// Show per-day reservation counts for the current month
    Stats,

    /// Export data to CSV or JSON
    Export {
        /// What to export: reservations, stats, full
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Interactive session keeping reservations in memory between commands
    Shell,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // State lives for a single invocation; the shell command keeps it
        // alive across several interactions.
        let mut service = RentalService::with_seed_data();

        match self.command {
            Commands::Books => run_books_command(&service),

            Commands::Persons => run_persons_command(&service),

            Commands::Reserve {
                person,
                title,
                days,
                date,
            } => {
                let start_date = match date {
                    Some(date_str) => parse_date(&date_str).with_context(|| {
                        format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)
                    })?,
                    None => Utc::now().date_naive(),
                };

                let reservation = service.reserve(person, &title, days, start_date)?;
                println!(
                    "Reserved {} for {} days starting from {}",
                    reservation.book_title, reservation.days, reservation.start_date
                );
            }

            Commands::Reservations { person } => run_reservations_command(&service, person)?,

            Commands::Stats => run_stats_command(&service),

            Commands::Export {
                export_type,
                output,
            } => run_export_command(&service, &export_type, output.as_deref())?,

            Commands::Shell => run_shell(&mut service)?,
        }

        Ok(())
    }
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'", input))
}

fn run_books_command(service: &RentalService) {
    println!("{:<25} {:>8}", "TITLE", "PRICE");
    println!("{}", "-".repeat(34));
    for book in service.list_books() {
        println!("{:<25} {:>8}", book.title, format_cents(book.price_cents));
    }
}

fn run_persons_command(service: &RentalService) {
    println!("{:<5} {:<20} RESERVATIONS", "ID", "NAME");
    println!("{}", "-".repeat(40));
    for person in service.list_persons() {
        println!(
            "{:<5} {:<20} {}",
            person.id,
            person.full_name(),
            person.reservations.len()
        );
    }
}

fn run_reservations_command(service: &RentalService, person: PersonId) -> Result<()> {
    let reservations = service.list_reservations_for(person)?;

    if reservations.is_empty() {
        println!("No reservations found.");
        return Ok(());
    }

    println!("{:<25} {:>5} {:<12}", "BOOK", "DAYS", "START DATE");
    println!("{}", "-".repeat(44));
    for reservation in &reservations {
        println!(
            "{:<25} {:>5} {:<12}",
            reservation.book_title, reservation.days, reservation.start_date
        );
    }

    Ok(())
}

fn run_stats_command(service: &RentalService) {
    let report = service.monthly_counts(Utc::now());

    println!("Reservations in {}-{:02}", report.year, report.month);
    println!("{:<12} {:>12}", "DATE", "RESERVATIONS");
    println!("{}", "-".repeat(25));
    for day in &report.days {
        println!("{:<12} {:>12}", day.date.to_string(), day.count);
    }
    println!("{}", "-".repeat(25));
    println!("{:<12} {:>12}", "TOTAL", report.total());
}

fn run_export_command(
    service: &RentalService,
    export_type: &str,
    output: Option<&str>,
) -> Result<()> {
    let exporter = Exporter::new(service);

    let writer: Box<dyn IoWrite> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create '{}'", path))?,
        ),
        None => Box::new(io::stdout()),
    };

    match export_type {
        "reservations" => {
            let count = exporter.export_reservations_csv(writer)?;
            eprintln!("Exported {} reservation(s)", count);
        }
        "stats" => {
            let count = exporter.export_stats_csv(writer, Utc::now())?;
            eprintln!("Exported {} bucket(s)", count);
        }
        "full" => {
            exporter.export_full_json(writer)?;
            eprintln!("Exported full snapshot");
        }
        other => anyhow::bail!(
            "Unknown export type '{}'. Use: reservations, stats, full",
            other
        ),
    }

    Ok(())
}

// ========================
// Interactive shell
// ========================

const SHELL_HELP: &str = "\
Commands:
  books                               list the catalog
  persons                             list known persons
  reserve <id> <days> <date> <title>  reserve a book (date: YYYY-MM-DD)
  check <id>                          show reservations for a person
  stats                               per-day counts for the current month
  export <reservations|stats|full> <file>
  help                                show this help
  quit                                leave the shell";

fn run_shell(service: &mut RentalService) -> Result<()> {
    println!("Book Rental System. Type 'help' for commands, 'quit' to exit.");

    let stdin = io::stdin();
    loop {
        print!("librio> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = tokens.split_first() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{}", SHELL_HELP),
            "books" => run_books_command(service),
            "persons" => run_persons_command(service),
            "reserve" => {
                if let Err(err) = shell_reserve(service, args) {
                    println!("Error: {}", err);
                }
            }
            "check" => {
                if let Err(err) = shell_check(service, args) {
                    println!("Error: {}", err);
                }
            }
            "stats" => run_stats_command(service),
            "export" => {
                if let Err(err) = shell_export(service, args) {
                    println!("Error: {}", err);
                }
            }
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }

    Ok(())
}

fn shell_reserve(service: &mut RentalService, args: &[&str]) -> Result<()> {
    let [id, days, date, title @ ..] = args else {
        anyhow::bail!("Usage: reserve <id> <days> <date> <title>");
    };
    if title.is_empty() {
        anyhow::bail!("Usage: reserve <id> <days> <date> <title>");
    }

    let person: PersonId = id.parse().context("Invalid person id")?;
    let days: u32 = days.parse().context("Invalid day count")?;
    let start_date = parse_date(date)?;

    let reservation = service.reserve(person, &title.join(" "), days, start_date)?;
    println!(
        "Reserved {} for {} days starting from {}",
        reservation.book_title, reservation.days, reservation.start_date
    );
    Ok(())
}

fn shell_check(service: &RentalService, args: &[&str]) -> Result<()> {
    let [id] = args else {
        anyhow::bail!("Usage: check <id>");
    };
    let person: PersonId = id.parse().context("Invalid person id")?;
    run_reservations_command(service, person)
}

fn shell_export(service: &RentalService, args: &[&str]) -> Result<()> {
    let [export_type, path] = args else {
        anyhow::bail!("Usage: export <reservations|stats|full> <file>");
    };
    run_export_command(service, export_type, Some(*path))
}
