use chrono::NaiveDate;
use uuid::Uuid;

use split_core::{
    domain::{ExpenseDraft, SheetBook},
    errors::SplitError,
    services::SheetService,
};

const EPSILON: f64 = 1e-9;

fn draft(amount: f64, payer: Uuid, sharers: Vec<Uuid>) -> ExpenseDraft {
    ExpenseDraft {
        description: "groceries".into(),
        amount,
        payer_id: payer,
        shared_by: sharers,
        date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
    }
}

fn prepared_book() -> (SheetBook, Uuid, Uuid, Uuid, Uuid) {
    let mut book = SheetBook::new();
    let sheet_id = SheetService::add_sheet(&mut book, "Lisbon Trip");
    let anna = SheetService::add_person(&mut book, sheet_id, "Anna").unwrap();
    let ben = SheetService::add_person(&mut book, sheet_id, "Ben").unwrap();
    let cleo = SheetService::add_person(&mut book, sheet_id, "Cleo").unwrap();
    (book, sheet_id, anna, ben, cleo)
}

#[test]
fn add_expense_updates_totals_immediately() {
    let (mut book, sheet_id, anna, ben, cleo) = prepared_book();
    SheetService::add_expense(&mut book, sheet_id, draft(30.0, anna, vec![anna, ben, cleo]))
        .expect("add expense");

    let sheet = book.sheet(sheet_id).unwrap();
    assert!((sheet.person(anna).unwrap().total_paid - 30.0).abs() < EPSILON);
    assert!((sheet.person(anna).unwrap().total_owed - 10.0).abs() < EPSILON);
    assert!((sheet.person(ben).unwrap().total_owed - 10.0).abs() < EPSILON);
    assert!((sheet.person(cleo).unwrap().total_owed - 10.0).abs() < EPSILON);
    assert!((sheet.total_expenses - 30.0).abs() < EPSILON);
}

#[test]
fn totals_accumulate_across_expenses() {
    let (mut book, sheet_id, anna, ben, _) = prepared_book();
    SheetService::add_expense(&mut book, sheet_id, draft(10.0, anna, vec![anna, ben])).unwrap();
    SheetService::add_expense(&mut book, sheet_id, draft(6.0, ben, vec![anna, ben])).unwrap();

    let sheet = book.sheet(sheet_id).unwrap();
    assert!((sheet.person(anna).unwrap().total_owed - 8.0).abs() < EPSILON);
    assert!((sheet.person(ben).unwrap().total_paid - 6.0).abs() < EPSILON);
    assert!((sheet.total_expenses - 16.0).abs() < EPSILON);
}

#[test]
fn add_person_to_unknown_sheet_fails() {
    let mut book = SheetBook::new();
    let missing = Uuid::new_v4();
    let err = SheetService::add_person(&mut book, missing, "Anna").unwrap_err();
    match err {
        SplitError::SheetNotFound(id) => assert_eq!(id, missing),
        other => panic!("expected sheet not found, got {other:?}"),
    }
}

#[test]
fn add_expense_with_unknown_payer_fails() {
    let (mut book, sheet_id, anna, _, _) = prepared_book();
    let stranger = Uuid::new_v4();
    let err =
        SheetService::add_expense(&mut book, sheet_id, draft(10.0, stranger, vec![anna]))
            .unwrap_err();
    match err {
        SplitError::PersonNotFound(id) => assert_eq!(id, stranger),
        other => panic!("expected person not found, got {other:?}"),
    }
    // The rejected expense must not have been inserted.
    assert!(book.sheet(sheet_id).unwrap().expenses.is_empty());
}

#[test]
fn add_expense_with_unknown_sharer_fails() {
    let (mut book, sheet_id, anna, _, _) = prepared_book();
    let stranger = Uuid::new_v4();
    let err =
        SheetService::add_expense(&mut book, sheet_id, draft(10.0, anna, vec![anna, stranger]))
            .unwrap_err();
    assert!(matches!(err, SplitError::PersonNotFound(id) if id == stranger));
}

#[test]
fn add_expense_rejects_empty_sharer_set() {
    let (mut book, sheet_id, anna, _, _) = prepared_book();
    let err = SheetService::add_expense(&mut book, sheet_id, draft(10.0, anna, vec![])).unwrap_err();
    assert!(matches!(err, SplitError::InvalidExpense(_)));
}

#[test]
fn add_expense_rejects_non_positive_amount() {
    let (mut book, sheet_id, anna, ben, _) = prepared_book();
    for amount in [0.0, -4.5] {
        let err = SheetService::add_expense(&mut book, sheet_id, draft(amount, anna, vec![ben]))
            .unwrap_err();
        assert!(matches!(err, SplitError::InvalidExpense(_)));
    }
}

#[test]
fn sheets_and_persons_keep_insertion_order() {
    let (book, sheet_id, anna, ben, cleo) = prepared_book();
    let sheet = book.sheet(sheet_id).unwrap();
    let ids: Vec<Uuid> = sheet.persons.iter().map(|person| person.id).collect();
    assert_eq!(ids, vec![anna, ben, cleo]);
}
