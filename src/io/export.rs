use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::RentalService;
use crate::domain::{Book, LedgerEntry, Person};

/// Full in-memory state for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub books: Vec<Book>,
    pub persons: Vec<Person>,
    pub ledger: Vec<LedgerEntry>,
}

/// Exporter for converting rental data to various formats
pub struct Exporter<'a> {
    service: &'a RentalService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a RentalService) -> Self {
        Self { service }
    }

    /// Export the reservation ledger to CSV format
    pub fn export_reservations_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(["person_id", "person", "book_title", "days", "start_date"])?;

        let mut count = 0;
        for entry in self.service.ledger() {
            // Ledger entries always point at a seeded person
            let person = self
                .service
                .get_person(entry.person_id)
                .map(|p| p.full_name())
                .unwrap_or_default();

            csv_writer.write_record([
                entry.person_id.to_string(),
                person,
                entry.book_title.clone(),
                entry.days.to_string(),
                entry.start_date.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export per-day reservation counts for the month of `reference` to CSV
    pub fn export_stats_csv<W: Write>(
        &self,
        writer: W,
        reference: DateTime<Utc>,
    ) -> Result<usize> {
        let report = self.service.monthly_counts(reference);
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(["date", "reservations"])?;

        let mut count = 0;
        for day in &report.days {
            csv_writer.write_record([day.date.to_string(), day.count.to_string()])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the full in-memory state as a JSON snapshot
    pub fn export_full_json<W: Write>(&self, mut writer: W) -> Result<StateSnapshot> {
        let snapshot = StateSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            books: self.service.list_books().to_vec(),
            persons: self.service.list_persons().to_vec(),
            ledger: self.service.ledger().to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
