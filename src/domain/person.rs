use serde::{Deserialize, Serialize};

use super::Reservation;

/// Person ids are caller-supplied integers, unique within the directory at
/// seed time. They are never auto-generated.
pub type PersonId = i64;

/// A known person in the directory, owning the ordered list of their own
/// reservations. The list is appended to only by the rental service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub reservations: Vec<Reservation>,
}

impl Person {
    pub fn new(id: PersonId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            reservations: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
