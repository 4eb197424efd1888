use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation count for a single bucket day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// Day-by-day reservation counts for one calendar month, in ascending date
/// order, suitable for direct charting (x = date, y = count). Always holds
/// exactly 30 buckets starting at the 1st of the month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayCount>,
}

impl MonthlyReport {
    /// Total reservations counted across all buckets.
    pub fn total(&self) -> i64 {
        self.days.iter().map(|day| day.count).sum()
    }
}
