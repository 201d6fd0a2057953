use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common;
use crate::domain::Sheet;

pub(crate) const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The top-level persisted record: every sheet the user has created.
/// This is the unit the storage backends save and load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetBook {
    #[serde(default = "SheetBook::schema_version_default")]
    pub schema_version: u8,
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl SheetBook {
    pub fn new() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            sheets: Vec::new(),
        }
    }

    pub fn add_sheet(&mut self, sheet: Sheet) -> Uuid {
        let id = sheet.id;
        self.sheets.push(sheet);
        id
    }

    pub fn sheet(&self, id: Uuid) -> Option<&Sheet> {
        common::find_by_id(&self.sheets, id)
    }

    pub fn sheet_mut(&mut self, id: Uuid) -> Option<&mut Sheet> {
        common::find_by_id_mut(&mut self.sheets, id)
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for SheetBook {
    fn default() -> Self {
        Self::new()
    }
}
