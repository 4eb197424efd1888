use crate::domain::{Book, LedgerEntry, Person, PersonId, Reservation};

/// In-memory store for the book catalog, the person directory and the global
/// reservation ledger. All state lives here for the process lifetime;
/// nothing is persisted.
///
/// The ledger duplicates the person-side reservation lists on purpose: every
/// person-side reservation has exactly one matching ledger entry carrying
/// that person's id, stored as an independent copy.
pub struct Repository {
    books: Vec<Book>,
    persons: Vec<Person>,
    ledger: Vec<LedgerEntry>,
}

impl Repository {
    /// Create a repository with the given catalog and directory and an empty
    /// ledger. Person ids must be unique; lookups take the first match.
    pub fn new(books: Vec<Book>, persons: Vec<Person>) -> Self {
        Self {
            books,
            persons,
            ledger: Vec::new(),
        }
    }

    /// The fixed demo data set: four books, three known persons, no
    /// reservations.
    pub fn with_seed_data() -> Self {
        Self::new(
            vec![
                Book::new("Harry Potter", 1000),
                Book::new("The Hobbit", 1200),
                Book::new("1984", 800),
                Book::new("To Kill a Mockingbird", 900),
            ],
            vec![
                Person::new(1, "John", "Doe"),
                Person::new(2, "Jane", "Smith"),
                Person::new(3, "Alice", "Johnson"),
            ],
        )
    }

    // ========================
    // Catalog
    // ========================

    /// List the catalog in seed order.
    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    // ========================
    // Directory
    // ========================

    /// List the directory in seed order.
    pub fn list_persons(&self) -> &[Person] {
        &self.persons
    }

    /// Find a person by id (first match).
    pub fn get_person(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|person| person.id == id)
    }

    // ========================
    // Ledger
    // ========================

    /// All ledger entries in insertion order.
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Append a reservation to its owner's list and a copy to the ledger.
    /// Returns false without touching any state when the person is unknown.
    pub fn append_reservation(&mut self, person_id: PersonId, reservation: Reservation) -> bool {
        let Some(person) = self.persons.iter_mut().find(|person| person.id == person_id) else {
            return false;
        };

        self.ledger.push(LedgerEntry::new(person_id, &reservation));
        person.reservations.push(reservation);
        true
    }
}
