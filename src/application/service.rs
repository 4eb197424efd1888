use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::domain::{self, Book, LedgerEntry, Person, PersonId, Reservation};
use crate::storage::Repository;

use super::{AppError, DayCount, MonthlyReport};

/// Application service providing the rental operations. This is the primary
/// interface for any client (CLI, API, TUI, etc.).
///
/// All state is held by the repository and mutated only through `reserve`.
/// The service is single-threaded by design; a concurrent front end must add
/// its own synchronization around one instance.
pub struct RentalService {
    repo: Repository,
}

impl RentalService {
    /// Create a new rental service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Create a service over the fixed demo catalog and directory.
    pub fn with_seed_data() -> Self {
        Self::new(Repository::with_seed_data())
    }

    // ========================
    // Catalog operations
    // ========================

    /// List the book catalog.
    pub fn list_books(&self) -> &[Book] {
        self.repo.list_books()
    }

    // ========================
    // Directory operations
    // ========================

    /// List all known persons.
    pub fn list_persons(&self) -> &[Person] {
        self.repo.list_persons()
    }

    /// Get a person by id.
    pub fn get_person(&self, id: PersonId) -> Result<&Person, AppError> {
        self.repo
            .get_person(id)
            .ok_or(AppError::PersonNotFound(id))
    }

    /// List the reservations of a person, oldest first. The list may be
    /// empty; an unknown id is an error.
    pub fn list_reservations_for(&self, id: PersonId) -> Result<Vec<Reservation>, AppError> {
        Ok(self.get_person(id)?.reservations.clone())
    }

    // ========================
    // Reservation operations
    // ========================

    /// Reserve a book for a person.
    ///
    /// On success the reservation is appended to the person's list and a
    /// copy to the global ledger, in insertion order. On failure nothing is
    /// mutated. Calling twice with the same arguments creates two distinct
    /// reservations.
    pub fn reserve(
        &mut self,
        person_id: PersonId,
        book_title: &str,
        days: u32,
        start_date: NaiveDate,
    ) -> Result<Reservation, AppError> {
        if days < 1 {
            return Err(AppError::InvalidReservation(
                "rental must last at least one day".to_string(),
            ));
        }

        let reservation = Reservation::new(book_title, days, start_date);
        if !self.repo.append_reservation(person_id, reservation.clone()) {
            return Err(AppError::PersonNotFound(person_id));
        }

        Ok(reservation)
    }

    /// All ledger entries in insertion order.
    pub fn ledger(&self) -> &[LedgerEntry] {
        self.repo.ledger()
    }

    // ========================
    // Statistics operations
    // ========================

    /// Per-day reservation counts for the month of `reference`. An empty
    /// ledger yields all buckets at zero; there are no failure modes.
    pub fn monthly_counts(&self, reference: DateTime<Utc>) -> MonthlyReport {
        let days = domain::count_per_day(self.repo.ledger(), reference)
            .into_iter()
            .map(|(date, count)| DayCount { date, count })
            .collect();

        MonthlyReport {
            year: reference.year(),
            month: reference.month(),
            days,
        }
    }
}
