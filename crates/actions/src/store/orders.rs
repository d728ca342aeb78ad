//! CSV-backed order store.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parcelbot_core::{Order, OrderMap};
use tracing::{instrument, warn};

use super::StoreError;

/// Loads and persists the orders dataset.
///
/// Column schema: `order_id,product_name,delivery_date,status`.
#[derive(Debug, Clone)]
pub struct OrderStore {
    path: PathBuf,
}

impl OrderStore {
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

    /// Read the full orders dataset.
    ///
    /// A missing file yields an empty map with a warning; unparseable rows
    /// are skipped with a warning. Duplicate `order_id`s keep the last row,
    /// matching plain map insertion semantics.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] only for I/O failures other than the
    /// file being absent.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<OrderMap, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("orders file not found, treating as empty dataset");
                return Ok(OrderMap::new());
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

        let mut orders = OrderMap::new();
        for (row, result) in reader.deserialize::<Order>().enumerate() {
            match result {
                Ok(order) => {
                    orders.insert(order.order_id.clone(), order);
                }
                // Header row is line 1, so data row N sits on line N + 1.
                Err(e) => warn!(line = row + 2, error = %e, "skipping malformed order row"),
            }
        }

        Ok(orders)
    }

    /// Overwrite the backing file with the given dataset.
    ///
    /// The whole file is rewritten through a sibling temp file and renamed
    /// into place. No concurrent-writer protection: two simultaneous saves
    /// resolve as last-writer-wins at whole-file granularity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] or [`StoreError::Serialize`] on
    /// failure; nothing is logged-and-swallowed here, the caller decides
    /// what to tell the user.
    #[instrument(skip(self, orders), fields(path = %self.path.display(), count = orders.len()))]
    pub fn save(&self, orders: &OrderMap) -> Result<(), StoreError> {
        let tmp_path = self.path.with_extension("csv.tmp");
        let result = self.write_via(&tmp_path, orders);
        if result.is_err() {
            // Best effort: the temp file must not outlive a failed save.
            let _ = std::fs::remove_file(&tmp_path);
        }
        result
    }

    fn write_via(&self, tmp_path: &Path, orders: &OrderMap) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_path(tmp_path).map_err(|e| write_error(tmp_path, e))?;
        for order in orders.values() {
            writer
                .serialize(order)
                .map_err(|e| serialize_error(tmp_path, e))?;
        }
        writer.flush().map_err(|source| StoreError::Write {
            path: tmp_path.display().to_string(),
            source,
        })?;
        drop(writer);

        std::fs::rename(tmp_path, &self.path).map_err(|source| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

fn write_error(path: &Path, e: csv::Error) -> StoreError {
    match e.into_kind() {
        csv::ErrorKind::Io(source) => StoreError::Write {
            path: path.display().to_string(),
            source,
        },
        other => StoreError::Write {
            path: path.display().to_string(),
            source: std::io::Error::other(format!("{other:?}")),
        },
    }
}

fn serialize_error(path: &Path, e: csv::Error) -> StoreError {
    StoreError::Serialize {
        path: path.display().to_string(),
        source: e,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_order(id: &str) -> Order {
        Order {
            order_id: id.to_string(),
            product_name: "Laptop".to_string(),
            delivery_date: "2026-09-10".to_string(),
            status: "pending".to_string(),
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = OrderStore::new(dir.path().join("orders.csv"));
        let orders = store.load().unwrap();
        assert!(orders.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = OrderStore::new(dir.path().join("orders.csv"));

        let mut orders = OrderMap::new();
        for id in ["O3", "O1", "O2"] {
            orders.insert(id.to_string(), sample_order(id));
        }
        store.save(&orders).unwrap();

        let loaded = store.load().unwrap();
        let keys: Vec<_> = loaded.keys().map(String::as_str).collect();
        assert_eq!(keys, ["O3", "O1", "O2"]);
        assert_eq!(loaded.get("O1").unwrap().product_name, "Laptop");
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        std::fs::write(
            &path,
            "order_id,product_name,delivery_date,status\n\
             O1,Laptop,2026-09-10,pending\n\
             O2,Watch\n\
             O3,Charger,2026-09-12,shipped\n",
        )
        .unwrap();

        let orders = OrderStore::new(path).load().unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.contains_key("O1"));
        assert!(orders.contains_key("O3"));
    }

    #[test]
    fn save_writes_fixed_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let store = OrderStore::new(&path);

        let mut orders = OrderMap::new();
        orders.insert("O1".to_string(), sample_order("O1"));
        store.save(&orders).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("order_id,product_name,delivery_date,status\n"));
    }

    #[test]
    fn failed_save_removes_the_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        // A directory at the target path makes the final rename fail.
        std::fs::create_dir(&path).unwrap();
        let store = OrderStore::new(&path);

        let mut orders = OrderMap::new();
        orders.insert("O1".to_string(), sample_order("O1"));
        assert!(store.save(&orders).is_err());
        assert!(!dir.path().join("orders.csv.tmp").exists());
    }
}
