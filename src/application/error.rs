use thiserror::Error;

use crate::domain::PersonId;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),

    #[error("Invalid reservation: {0}")]
    InvalidReservation(String),
}
