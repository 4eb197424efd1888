use std::fmt;

use serde::{Deserialize, Serialize};

/// Prices are represented as integer cents to avoid floating-point precision
/// issues. For EUR/USD, 1 unit = 100 cents, so €10.00 = 1000 cents.
pub type Cents = i64;

/// Format cents as a human-readable currency string.
/// Example: 1000 -> "10.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// A book in the rental catalog. The catalog is fixed at startup and books
/// have no lifecycle beyond the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub price_cents: Cents,
}

impl Book {
    pub fn new(title: impl Into<String>, price_cents: Cents) -> Self {
        Self {
            title: title.into(),
            price_cents,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, format_cents(self.price_cents))
    }
}
