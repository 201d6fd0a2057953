use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::domain::{book::CURRENT_SCHEMA_VERSION, SheetBook};
use crate::errors::SplitError;
use crate::utils::{app_data_dir, ensure_dir};

use super::{Result, StorageBackend};

// The whole collection lives in one fixed-name slot.
const SLOT_FILE: &str = "trip_sheets.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the whole sheet collection as pretty JSON in a single fixed-name
/// slot under the application data directory. Writes are staged to a
/// temporary file and renamed into place.
#[derive(Clone)]
pub struct JsonStorage {
    slot_path: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            slot_path: root.join(SLOT_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, book: &SheetBook) -> Result<()> {
        let json = serde_json::to_string_pretty(book)?;
        let tmp = tmp_path(&self.slot_path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.slot_path)?;
        debug!(path = %self.slot_path.display(), sheets = book.sheet_count(), "saved sheet book");
        Ok(())
    }

    fn load(&self) -> Result<SheetBook> {
        if !self.slot_path.exists() {
            return Ok(SheetBook::new());
        }
        let data = fs::read_to_string(&self.slot_path)?;
        let book: SheetBook = serde_json::from_str(&data)?;
        if book.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(SplitError::StorageError(format!(
                "sheet book schema v{} is newer than supported v{}",
                book.schema_version, CURRENT_SCHEMA_VERSION
            )));
        }
        debug!(path = %self.slot_path.display(), sheets = book.sheet_count(), "loaded sheet book");
        Ok(book)
    }

    fn exists(&self) -> bool {
        self.slot_path.exists()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
