//! Balance computation over a single sheet.
//!
//! The engine is stateless: all state lives in the `Sheet` passed in, and
//! every routine is a deterministic function of the current person and
//! expense lists. There is no I/O here; persistence is the storage layer's
//! concern.

use tracing::debug;

use crate::domain::{Balance, Sheet};
use crate::errors::{Result, SplitError};

/// Recomputes every derived total on the sheet from its expense list.
///
/// Each person's `total_paid` and `total_owed` are reset and rebuilt, and
/// `total_expenses` is set to the sum of all expense amounts. Running this
/// twice on the same data yields identical results.
///
/// Fails with `InvalidExpense` if any expense has an empty sharer set or a
/// non-positive amount, and with `UnknownPersonReference` if an expense
/// names a person that is not in the sheet. Validation runs before any
/// mutation, so a failing call leaves the sheet's totals untouched.
pub fn recompute_totals(sheet: &mut Sheet) -> Result<()> {
    for expense in &sheet.expenses {
        expense.validate()?;
        if !sheet.has_person(expense.payer_id) {
            return Err(SplitError::UnknownPersonReference(expense.payer_id));
        }
        for sharer_id in &expense.shared_by {
            if !sheet.has_person(*sharer_id) {
                return Err(SplitError::UnknownPersonReference(*sharer_id));
            }
        }
    }

    let Sheet {
        persons,
        expenses,
        total_expenses,
        ..
    } = &mut *sheet;

    for person in persons.iter_mut() {
        person.reset_totals();
    }

    for expense in expenses.iter() {
        let per_person = expense.per_person_amount();
        if let Some(payer) = persons.iter_mut().find(|p| p.id == expense.payer_id) {
            payer.total_paid += expense.amount;
        }
        for sharer_id in &expense.shared_by {
            if let Some(sharer) = persons.iter_mut().find(|p| p.id == *sharer_id) {
                sharer.total_owed += per_person;
            }
        }
    }

    *total_expenses = expenses.iter().map(|expense| expense.amount).sum();
    debug!(
        persons = persons.len(),
        expenses = expenses.len(),
        total = *total_expenses,
        "recomputed sheet totals"
    );
    Ok(())
}

/// Derives the pairwise debt list for a sheet without mutating it.
///
/// One `Balance` is emitted per (expense, sharer) pair where the sharer is
/// not the payer; multiple shared expenses between the same two people yield
/// multiple entries, never a netted one. Output order follows expense
/// insertion order, then `shared_by` order within each expense.
pub fn calculate_balances(sheet: &Sheet) -> Result<Vec<Balance>> {
    let mut balances = Vec::new();
    for expense in &sheet.expenses {
        expense.validate()?;
        let per_person = expense.per_person_amount();
        for sharer_id in &expense.shared_by {
            if *sharer_id != expense.payer_id {
                balances.push(Balance {
                    debtor: *sharer_id,
                    creditor: expense.payer_id,
                    amount: per_person,
                });
            }
        }
    }
    Ok(balances)
}
