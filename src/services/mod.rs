use tracing::debug;
use uuid::Uuid;

use crate::domain::{Expense, ExpenseDraft, Person, Sheet, SheetBook};
use crate::engine;
use crate::errors::{Result, SplitError};

/// Validated mutators over the sheet collection. Unknown ids are reported
/// as errors rather than swallowed, and totals are recomputed as part of
/// every expense insertion.
pub struct SheetService;

impl SheetService {
    /// Creates an empty sheet and returns its id.
    pub fn add_sheet(book: &mut SheetBook, name: impl Into<String>) -> Uuid {
        let sheet = Sheet::new(name);
        let id = book.add_sheet(sheet);
        debug!(sheet = %id, "added sheet");
        id
    }

    /// Adds a person with zeroed totals to an existing sheet.
    pub fn add_person(
        book: &mut SheetBook,
        sheet_id: Uuid,
        name: impl Into<String>,
    ) -> Result<Uuid> {
        let sheet = book
            .sheet_mut(sheet_id)
            .ok_or(SplitError::SheetNotFound(sheet_id))?;
        let id = sheet.add_person(Person::new(name));
        debug!(sheet = %sheet_id, person = %id, "added person");
        Ok(id)
    }

    /// Inserts an expense and recomputes the sheet's derived totals.
    ///
    /// The draft is validated up front: the amount must be positive, the
    /// sharer set non-empty, and the payer and every sharer must already be
    /// persons on the sheet. Totals are only guaranteed accurate through
    /// this path, not after direct mutation of the sheet's collections.
    pub fn add_expense(book: &mut SheetBook, sheet_id: Uuid, draft: ExpenseDraft) -> Result<Uuid> {
        let sheet = book
            .sheet_mut(sheet_id)
            .ok_or(SplitError::SheetNotFound(sheet_id))?;
        let expense = Expense::from_draft(draft);
        expense.validate()?;
        if !sheet.has_person(expense.payer_id) {
            return Err(SplitError::PersonNotFound(expense.payer_id));
        }
        for sharer_id in &expense.shared_by {
            if !sheet.has_person(*sharer_id) {
                return Err(SplitError::PersonNotFound(*sharer_id));
            }
        }
        let id = sheet.add_expense(expense);
        engine::recompute_totals(sheet)?;
        debug!(sheet = %sheet_id, expense = %id, "added expense");
        Ok(id)
    }
}
