pub mod balance;
pub mod book;
pub mod common;
pub mod expense;
pub mod person;
pub mod sheet;

pub use balance::Balance;
pub use book::SheetBook;
pub use common::{Identifiable, NamedEntity};
pub use expense::{Expense, ExpenseDraft};
pub use person::Person;
pub use sheet::Sheet;
