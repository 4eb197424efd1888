use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PersonId;

/// A reservation of a single book for a number of days starting on a given
/// date. Reservations are immutable - they are never edited or deleted, and
/// duplicates are allowed (reserving the same book twice creates two entries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub book_title: String,
    /// Rental length in days, always >= 1
    pub days: u32,
    /// Serialized as "YYYY-MM-DD"
    pub start_date: NaiveDate,
}

impl Reservation {
    pub fn new(book_title: impl Into<String>, days: u32, start_date: NaiveDate) -> Self {
        Self {
            book_title: book_title.into(),
            days,
            start_date,
        }
    }
}

/// Ledger-side record of a reservation plus its owner. This is a copy of the
/// person-side reservation, not a reference: the two are independent after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub person_id: PersonId,
    pub book_title: String,
    pub days: u32,
    pub start_date: NaiveDate,
}

impl LedgerEntry {
    pub fn new(person_id: PersonId, reservation: &Reservation) -> Self {
        Self {
            person_id,
            book_title: reservation.book_title.clone(),
            days: reservation.days,
            start_date: reservation.start_date,
        }
    }

    /// The reservation fields of this entry, without the owner.
    pub fn reservation(&self) -> Reservation {
        Reservation::new(self.book_title.clone(), self.days, self.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_create_reservation() {
        let reservation = Reservation::new("1984", 5, sample_date());

        assert_eq!(reservation.book_title, "1984");
        assert_eq!(reservation.days, 5);
        assert_eq!(reservation.start_date, sample_date());
    }

    #[test]
    fn test_ledger_entry_copies_reservation() {
        let reservation = Reservation::new("The Hobbit", 3, sample_date());
        let entry = LedgerEntry::new(2, &reservation);

        assert_eq!(entry.person_id, 2);
        assert_eq!(entry.reservation(), reservation);
    }

    #[test]
    fn test_start_date_serializes_as_iso_date() {
        let reservation = Reservation::new("1984", 5, sample_date());
        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["start_date"], "2024-03-10");
    }
}
