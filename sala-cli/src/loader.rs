//! Loading of room descriptions and absorption catalogs from disk

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sala_acoustic::{Catalog, RoomDescription};
use tracing::info;

/// Load a room description; `.json` files are read as JSON, anything else as TOML
pub fn load_room(path: &Path) -> Result<RoomDescription> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read room description {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let description = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        RoomDescription::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    };

    Ok(description)
}

/// Load the absorption catalog, falling back to the built-in table
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_file(path)?;
            info!(path = %path.display(), materials = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}
