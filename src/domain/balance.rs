use serde::Serialize;
use uuid::Uuid;

/// A derived debt relation: `debtor` owes `creditor` the given amount for one
/// expense share. Never persisted; recomputed on demand from the expense list.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Balance {
    pub debtor: Uuid,
    pub creditor: Uuid,
    pub amount: f64,
}
