use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;
use log::error;

use bid_table::logger::initialize_logger;
use bid_table::{load_bids, BidTable};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV export of monthly bid sales
    #[arg(default_value = "eBid_Monthly_Sales.csv")]
    csv_path: String,

    /// Bid id looked up by the Find Bid menu entry
    #[arg(default_value = "98223")]
    bid_key: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logger();
    let args = Args::parse();

    let mut table = BidTable::new();
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    loop {
        println!("Menu:");
        println!("  1. Load Bids");
        println!("  2. Display All Bids");
        println!("  3. Find Bid");
        println!("  4. Remove Bid");
        println!("  9. Exit");
        let choice = match prompt(&mut input, "Enter choice: ")? {
            Some(choice) => choice,
            None => break, // stdin closed
        };

        match choice.as_str() {
            "1" => {
                let started = Instant::now();
                match load_bids(&args.csv_path, &mut table) {
                    Ok(report) => {
                        let elapsed = started.elapsed();
                        println!("{} bids read", report.inserted);
                        if report.duplicates + report.skipped > 0 {
                            println!(
                                "{} duplicate, {} skipped",
                                report.duplicates, report.skipped
                            );
                        }
                        println!("time: {:.6} seconds", elapsed.as_secs_f64());
                    }
                    Err(err) => error!("load failed: {}", err),
                }
            }
            "2" => display_all(&table),
            "3" => {
                let started = Instant::now();
                let found = table.get(&args.bid_key);
                let elapsed = started.elapsed();
                match found {
                    Some(bid) => println!("{}", bid),
                    None => println!("Bid Id {} not found.", args.bid_key),
                }
                println!("time: {:.6} seconds", elapsed.as_secs_f64());
            }
            "4" => {
                let id = match prompt(&mut input, "Enter Bid Id to remove: ")? {
                    Some(id) => id,
                    None => break,
                };
                match table.remove(&id) {
                    Some(_) => println!("Bid Id {} removed.", id),
                    None => println!("Bid Id {} not found.", id),
                }
            }
            "9" => {
                println!("Good bye.");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn prompt(
    input: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>, io::Error> {
    print!("{}", message);
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn display_all(table: &BidTable) {
    for (bucket, pos, bid) in table.iter() {
        if pos == 0 {
            println!(
                "Key {}: {} | {} | {} | {}",
                bucket, bid.id, bid.title, bid.amount, bid.fund
            );
        } else {
            println!(
                "    {} | {} | {} | {}",
                bid.id, bid.title, bid.amount, bid.fund
            );
        }
    }
}
