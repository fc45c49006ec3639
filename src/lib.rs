/* -------- Public modules -------- */
pub mod bid;
pub mod bucket_hash;
pub mod logger;

/* -------- Core table -------- */
mod bid_table;
pub use bid_table::{BidTable, Iter, DEFAULT_BUCKET_COUNT};

/* -------- CSV loader -------- */
mod loader;
pub use loader::{load_bids, parse_currency, LoadReport};

/* -------- Re-exports -------- */
pub use bid::Bid;
pub use bucket_hash::{BucketHasher, KeyMode};

/* -------- Error type -------- */
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read bid file: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}
