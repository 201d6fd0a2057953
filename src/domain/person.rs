use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, NamedEntity};

/// A participant in a sheet. `total_paid` and `total_owed` are derived values
/// owned by the recomputation pass; nothing else may mutate them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub total_paid: f64,
    #[serde(default)]
    pub total_owed: f64,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            total_paid: 0.0,
            total_owed: 0.0,
        }
    }

    pub(crate) fn reset_totals(&mut self) {
        self.total_paid = 0.0;
        self.total_owed = 0.0;
    }
}

impl Identifiable for Person {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Person {
    fn name(&self) -> &str {
        &self.name
    }
}
