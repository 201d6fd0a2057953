use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;
use crate::errors::{Result, SplitError};

/// A single payment fronted by one person and shared among a set of people.
/// Immutable once created; changing history means deleting and re-adding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub payer_id: Uuid,
    pub shared_by: Vec<Uuid>,
    pub date: NaiveDate,
}

/// Caller-supplied expense fields; the id is assigned at insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: f64,
    pub payer_id: Uuid,
    pub shared_by: Vec<Uuid>,
    pub date: NaiveDate,
}

impl Expense {
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: draft.description,
            amount: draft.amount,
            payer_id: draft.payer_id,
            shared_by: draft.shared_by,
            date: draft.date,
        }
    }

    /// Rejects expenses that would make the per-person share meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.shared_by.is_empty() {
            return Err(SplitError::InvalidExpense(
                "expense must be shared by at least one person".into(),
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(SplitError::InvalidExpense(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    /// Equal share of the amount per sharer. Only meaningful once `validate`
    /// has passed; `shared_by` must be non-empty.
    pub fn per_person_amount(&self) -> f64 {
        self.amount / self.shared_by.len() as f64
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}
