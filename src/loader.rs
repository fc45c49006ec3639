use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::bid::Bid;
use crate::bid_table::BidTable;
use crate::LoadError;

// column layout of the monthly-sales export
const COL_TITLE: usize = 0;
const COL_ID: usize = 1;
const COL_AMOUNT: usize = 4;
const COL_FUND: usize = 8;

/// Row accounting for one [`load_bids`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows stored in the table.
    pub inserted: usize,
    /// Rows discarded because their id was already present.
    pub duplicates: usize,
    /// Rows skipped as malformed (too few columns, empty id).
    pub skipped: usize,
}

impl LoadReport {
    /// Data rows processed, whatever their outcome.
    pub fn rows_read(&self) -> usize {
        self.inserted + self.duplicates + self.skipped
    }
}

/// Load a CSV export of bids into the table. The first line is a header
/// and is skipped; a malformed row is warned about and skipped without
/// aborting the rest of the load.
pub fn load_bids(path: impl AsRef<Path>, table: &mut BidTable) -> Result<LoadReport, LoadError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let mut report = LoadReport::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line_no == 0 || line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_row(&line);
        match row_to_bid(&fields) {
            Some(bid) => {
                if table.insert(bid) {
                    report.inserted += 1;
                } else {
                    report.duplicates += 1;
                }
            }
            None => {
                warn!(
                    "skipping malformed row {} ({} fields)",
                    line_no + 1,
                    fields.len()
                );
                report.skipped += 1;
            }
        }
    }

    info!(
        "loaded {} bids ({} duplicate, {} skipped)",
        report.inserted, report.duplicates, report.skipped
    );
    Ok(report)
}

fn row_to_bid(fields: &[String]) -> Option<Bid> {
    if fields.len() <= COL_FUND {
        return None;
    }
    let id = fields[COL_ID].trim();
    if id.is_empty() {
        return None;
    }
    Some(Bid::new(
        id,
        fields[COL_TITLE].trim(),
        fields[COL_FUND].trim(),
        parse_currency(&fields[COL_AMOUNT], '$'),
    ))
}

/// Split one CSV row into fields. Handles double-quoted fields with
/// embedded commas and doubled-quote escapes; that covers the export
/// format this loader targets.
fn split_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}

/// Strip every occurrence of `symbol` from `text` and parse the rest as
/// a float. Anything unparseable yields 0.0. Pure; no shared state.
pub fn parse_currency(text: &str, symbol: char) -> f64 {
    let stripped: String = text.chars().filter(|&c| c != symbol).collect();
    stripped.trim().parse().unwrap_or(0.0)
}
