use std::fmt;

/// A single auction bid record. Stored by value; the table never shares
/// references between entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bid {
    /// Unique identifier, expected to be numeric text (e.g. "98223").
    pub id: String,
    pub title: String,
    pub fund: String,
    /// Winning amount in dollars; 0.0 when absent or unparseable.
    pub amount: f64,
}

impl Bid {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {} | {}",
            self.id, self.title, self.amount, self.fund
        )
    }
}
