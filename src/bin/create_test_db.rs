use std::{
    error::Error,
    path::Path,
    process::exit,
    sync::{Arc, Mutex},
};

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use finance_tracker::{
    initialize_db,
    models::TransactionBuilder,
    stores::{SqliteTransactionStore, TransactionStore},
};

/// A utility for creating a test database for the finance tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Sample expenses spread over the last few months: (days ago, amount,
/// description, category).
const SAMPLE_TRANSACTIONS: [(i64, f64, &str, &str); 10] = [
    (1, 14.50, "Lunch at the corner cafe", "Food"),
    (2, 3.20, "Bus fare", "Transport"),
    (5, 62.99, "Weekly groceries", "Food"),
    (9, 120.00, "Power bill", "Utilities"),
    (12, 35.00, "New t-shirt", "Shopping"),
    (20, 18.00, "Movie tickets", "Entertainment"),
    (33, 55.00, "Dentist co-pay", "Health"),
    (38, 72.40, "Weekly groceries", "Food"),
    (47, 9.99, "App subscription", "Other"),
    (61, 240.00, "Car service", "Transport"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;

    initialize_db(&connection)?;

    println!("Creating sample transactions...");
    let mut store = SqliteTransactionStore::new(Arc::new(Mutex::new(connection)));
    let today = OffsetDateTime::now_utc()
        .replace_time(time::Time::MIDNIGHT);

    for (days_ago, amount, description, category) in SAMPLE_TRANSACTIONS {
        store.create(TransactionBuilder {
            amount,
            description: description.to_owned(),
            date: today - Duration::days(days_ago),
            category: category.to_owned(),
        })?;
    }

    println!("Success!");

    Ok(())
}
