// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use librio::application::RentalService;

/// Helper to create a service over the fixed demo catalog and directory:
/// four books, persons John Doe (1), Jane Smith (2), Alice Johnson (3).
pub fn test_service() -> RentalService {
    RentalService::with_seed_data()
}

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to parse a date string into a midnight DateTime<Utc>
pub fn parse_moment(date_str: &str) -> DateTime<Utc> {
    parse_date(date_str).and_hms_opt(0, 0, 0).unwrap().and_utc()
}
