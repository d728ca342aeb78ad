//! Seed the flat-file datasets with the sample orders and inventory.
//!
//! Writes the same five-item catalog and three sample orders the support
//! assistant demos ship with, so a fresh checkout can serve requests
//! immediately.

use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Errors that can occur while seeding datasets.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A target file already exists and `--force` was not given.
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(String),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

const ORDERS_CSV: &str = "\
order_id,product_name,delivery_date,status
O1001,Mobile,2026-09-05,shipped
O1002,Laptop,2026-09-09,pending
O1003,Charger,2026-09-02,delivered
";

const INVENTORY_CSV: &str = "\
item,display_name,quantity,price
item1,Mobile,12,199.99
item2,Laptop,4,899.00
item3,Watch,7,49.50
item4,Charger,5,12.50
item5,Ear-Phone,0,29.99
";

/// Write `orders.csv` and `inventory.csv` into `data_dir`.
///
/// # Errors
///
/// Returns [`SeedError::AlreadyExists`] if a target exists without
/// `force`, or [`SeedError::Io`] on filesystem failure.
pub fn datasets(data_dir: &str, force: bool) -> Result<(), SeedError> {
    let dir = Path::new(data_dir);
    std::fs::create_dir_all(dir)?;

    write_dataset(&dir.join("orders.csv"), ORDERS_CSV, force)?;
    write_dataset(&dir.join("inventory.csv"), INVENTORY_CSV, force)?;

    info!(data_dir, "sample datasets written");
    Ok(())
}

fn write_dataset(path: &Path, contents: &str, force: bool) -> Result<(), SeedError> {
    if path.exists() && !force {
        return Err(SeedError::AlreadyExists(path.display().to_string()));
    }
    std::fs::write(path, contents)?;
    info!(path = %path.display(), "wrote dataset");
    Ok(())
}
