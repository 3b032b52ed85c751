pub mod settings;

pub use settings::Settings;

use crate::core::catalog::{Catalog, load_catalog_file};
use crate::error::Result;
use crate::ui;

/// Built-in catalog plus the entries of the configured catalog file, if any.
///
/// User entries whose identifier is already present are skipped.
pub fn load_catalog(settings: &Settings) -> Result<Catalog> {
    let mut catalog = Catalog::builtin();

    if let Some(path) = &settings.catalog {
        let records = load_catalog_file(path)?;
        let total = records.len();
        let added = catalog.extend_unique(records);
        ui::verbose(&format!(
            "Loaded {} of {} catalog entries from {}",
            added,
            total,
            path.display()
        ));
    }

    Ok(catalog)
}
