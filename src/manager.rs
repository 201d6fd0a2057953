use uuid::Uuid;

use crate::domain::{Balance, ExpenseDraft, Sheet, SheetBook};
use crate::engine;
use crate::errors::{Result, SplitError};
use crate::services::SheetService;
use crate::storage::StorageBackend;

/// Facade that coordinates the in-memory sheet collection and the
/// persistence boundary. Callers load once, mutate through the service
/// methods, and save explicitly; nothing here writes storage implicitly.
pub struct SheetManager {
    book: SheetBook,
    storage: Box<dyn StorageBackend>,
}

impl SheetManager {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            book: SheetBook::new(),
            storage,
        }
    }

    /// Replaces the in-memory collection with the persisted one. A missing
    /// slot yields an empty collection.
    pub fn load(&mut self) -> Result<()> {
        self.book = self.storage.load()?;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.book)
    }

    pub fn book(&self) -> &SheetBook {
        &self.book
    }

    pub fn sheet(&self, id: Uuid) -> Option<&Sheet> {
        self.book.sheet(id)
    }

    pub fn add_sheet(&mut self, name: impl Into<String>) -> Uuid {
        SheetService::add_sheet(&mut self.book, name)
    }

    pub fn add_person(&mut self, sheet_id: Uuid, name: impl Into<String>) -> Result<Uuid> {
        SheetService::add_person(&mut self.book, sheet_id, name)
    }

    pub fn add_expense(&mut self, sheet_id: Uuid, draft: ExpenseDraft) -> Result<Uuid> {
        SheetService::add_expense(&mut self.book, sheet_id, draft)
    }

    /// Derives the pairwise debt list for one sheet on demand.
    pub fn balances(&self, sheet_id: Uuid) -> Result<Vec<Balance>> {
        let sheet = self
            .book
            .sheet(sheet_id)
            .ok_or(SplitError::SheetNotFound(sheet_id))?;
        engine::calculate_balances(sheet)
    }
}
