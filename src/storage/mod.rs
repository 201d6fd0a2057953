pub mod json_backend;

use crate::domain::SheetBook;

pub use crate::errors::Result;
pub use json_backend::JsonStorage;

/// Abstraction over persistence backends for the sheet collection.
///
/// The engine never touches storage; backends move whole `SheetBook` values
/// across the application boundary.
pub trait StorageBackend: Send + Sync {
    fn save(&self, book: &SheetBook) -> Result<()>;
    fn load(&self) -> Result<SheetBook>;
    fn exists(&self) -> bool;
}
