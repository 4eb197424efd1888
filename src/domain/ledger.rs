use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use super::LedgerEntry;

/// The statistics window is a fixed run of 30 consecutive days from the 1st
/// of the reference month, independent of the real month length: day 31 of a
/// long month never gets a bucket, and a February window runs into March.
pub const STATS_WINDOW_DAYS: i64 = 30;

/// The bucket dates for the reference month, in ascending order.
pub fn window_dates(reference: DateTime<Utc>) -> Vec<NaiveDate> {
    // Day 1 exists in every month, with_day(1) cannot fail
    let first = reference.date_naive().with_day(1).unwrap();
    (0..STATS_WINDOW_DAYS)
        .map(|offset| first + Duration::days(offset))
        .collect()
}

/// Count ledger entries per start date for the reference month.
///
/// Only entries whose start date has the same year and month as `reference`
/// are counted. An in-month date without a bucket (the 31st of a long month)
/// is dropped silently; buckets past the end of a short month can never
/// match an in-month entry and stay at zero.
pub fn count_per_day(entries: &[LedgerEntry], reference: DateTime<Utc>) -> Vec<(NaiveDate, i64)> {
    let mut buckets: Vec<(NaiveDate, i64)> = window_dates(reference)
        .into_iter()
        .map(|date| (date, 0))
        .collect();

    for entry in entries {
        if entry.start_date.year() != reference.year()
            || entry.start_date.month() != reference.month()
        {
            continue;
        }
        if let Some(bucket) = buckets.iter_mut().find(|(date, _)| *date == entry.start_date) {
            bucket.1 += 1;
        }
    }

    buckets
}
