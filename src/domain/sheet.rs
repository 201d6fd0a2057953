use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{self, Identifiable, NamedEntity};
use crate::domain::{Expense, Person};

/// A named group of people and expenses, e.g. one trip. Owns its persons and
/// expenses; they reference each other only by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sheet {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub total_expenses: f64,
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            total_expenses: 0.0,
            persons: Vec::new(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a person, preserving insertion order.
    pub fn add_person(&mut self, person: Person) -> Uuid {
        let id = person.id;
        self.persons.push(person);
        self.touch();
        id
    }

    /// Appends an expense. Totals are stale until the next recomputation;
    /// go through the service layer to keep them accurate.
    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn person(&self, id: Uuid) -> Option<&Person> {
        common::find_by_id(&self.persons, id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        common::find_by_id(&self.expenses, id)
    }

    pub fn has_person(&self, id: Uuid) -> bool {
        self.person(id).is_some()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identifiable for Sheet {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Sheet {
    fn name(&self) -> &str {
        &self.name
    }
}
