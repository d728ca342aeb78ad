//! CSV-backed inventory store.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parcelbot_core::{CatalogMap, InventoryItem};
use tracing::{instrument, warn};

use super::StoreError;

/// Loads the inventory catalog. Read-only: no handler mutates inventory.
///
/// Column schema: `item,display_name,quantity,price`.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    /// Create a store backed by the given CSV file.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full catalog in file order.
    ///
    /// A missing file yields an empty catalog with a warning. Rows with
    /// malformed numeric fields (non-integer quantity, non-decimal price)
    /// are skipped with a warning rather than failing the whole load: one
    /// bad row must not take the inventory action down.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] only for I/O failures other than the
    /// file being absent.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<CatalogMap, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("inventory file not found, treating as empty catalog");
                return Ok(CatalogMap::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.display().to_string(),
                    source,
                });
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut catalog = CatalogMap::new();
        for (row, result) in reader.deserialize::<InventoryItem>().enumerate() {
            match result {
                Ok(item) => {
                    catalog.insert(item.item_id.clone(), item);
                }
                Err(e) => warn!(line = row + 2, error = %e, "skipping malformed inventory row"),
            }
        }

        Ok(catalog)
    }
}
