mod book;
mod ledger;
mod person;
mod reservation;

pub use book::*;
pub use ledger::*;
pub use person::*;
pub use reservation::*;
