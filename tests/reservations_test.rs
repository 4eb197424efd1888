mod common;

use common::{parse_date, test_service};
use librio::application::AppError;
use librio::domain::LedgerEntry;

#[test]
fn test_catalog_is_seeded_in_order() {
    let service = test_service();

    let titles: Vec<&str> = service
        .list_books()
        .iter()
        .map(|book| book.title.as_str())
        .collect();

    assert_eq!(
        titles,
        vec!["Harry Potter", "The Hobbit", "1984", "To Kill a Mockingbird"]
    );
}

#[test]
fn test_reserve_appends_to_person_and_ledger() {
    let mut service = test_service();

    let reservation = service
        .reserve(1, "The Hobbit", 3, parse_date("2024-03-12"))
        .unwrap();

    let reservations = service.list_reservations_for(1).unwrap();
    assert_eq!(reservations.last(), Some(&reservation));
    assert_eq!(service.ledger().len(), 1);
    assert_eq!(service.ledger()[0], LedgerEntry::new(1, &reservation));
}

#[test]
fn test_reserve_unknown_person_mutates_nothing() {
    let mut service = test_service();

    let result = service.reserve(99, "1984", 5, parse_date("2024-03-10"));

    assert!(matches!(result, Err(AppError::PersonNotFound(99))));
    assert!(service.ledger().is_empty());
    for person in service.list_persons() {
        assert!(person.reservations.is_empty());
    }
}

#[test]
fn test_list_reservations_unknown_person_fails() {
    let service = test_service();

    let result = service.list_reservations_for(99);
    assert!(matches!(result, Err(AppError::PersonNotFound(99))));
}

#[test]
fn test_list_reservations_known_person_starts_empty() {
    let service = test_service();

    let reservations = service.list_reservations_for(3).unwrap();
    assert!(reservations.is_empty());
}

#[test]
fn test_duplicate_reservations_are_allowed() {
    let mut service = test_service();
    let date = parse_date("2024-03-10");

    service.reserve(2, "1984", 5, date).unwrap();
    service.reserve(2, "1984", 5, date).unwrap();

    assert_eq!(service.list_reservations_for(2).unwrap().len(), 2);
    assert_eq!(service.ledger().len(), 2);
}

#[test]
fn test_reserve_zero_days_is_rejected() {
    let mut service = test_service();

    let result = service.reserve(1, "1984", 0, parse_date("2024-03-10"));

    assert!(matches!(result, Err(AppError::InvalidReservation(_))));
    assert!(service.ledger().is_empty());
    assert!(service.list_reservations_for(1).unwrap().is_empty());
}

#[test]
fn test_reservations_preserve_insertion_order() {
    let mut service = test_service();

    service
        .reserve(1, "Harry Potter", 2, parse_date("2024-03-03"))
        .unwrap();
    service
        .reserve(2, "The Hobbit", 4, parse_date("2024-03-01"))
        .unwrap();
    service.reserve(1, "1984", 1, parse_date("2024-03-02")).unwrap();

    let johns = service.list_reservations_for(1).unwrap();
    assert_eq!(johns[0].book_title, "Harry Potter");
    assert_eq!(johns[1].book_title, "1984");

    let ledger_titles: Vec<&str> = service
        .ledger()
        .iter()
        .map(|entry| entry.book_title.as_str())
        .collect();
    assert_eq!(ledger_titles, vec!["Harry Potter", "The Hobbit", "1984"]);
}

#[test]
fn test_end_to_end_reservation_scenario() {
    let mut service = test_service();

    let reservation = service
        .reserve(2, "1984", 5, parse_date("2024-03-10"))
        .unwrap();

    assert_eq!(reservation.book_title, "1984");
    assert_eq!(reservation.days, 5);

    let reservations = service.list_reservations_for(2).unwrap();
    assert_eq!(reservations, vec![reservation.clone()]);

    assert_eq!(service.ledger(), &[LedgerEntry::new(2, &reservation)]);
}

#[test]
fn test_person_copy_and_ledger_copy_stay_consistent() {
    let mut service = test_service();

    service.reserve(1, "1984", 2, parse_date("2024-03-05")).unwrap();
    service
        .reserve(3, "The Hobbit", 7, parse_date("2024-03-06"))
        .unwrap();

    for entry in service.ledger() {
        let reservations = service.list_reservations_for(entry.person_id).unwrap();
        assert!(reservations.contains(&entry.reservation()));
    }
}
