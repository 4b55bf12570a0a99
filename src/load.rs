//! Database loading and dumping.
use crate::model::Collection;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Load a collection from `path`, or from stdin when `path` is `-`.
pub fn load_collection(path: &Path) -> Result<Collection> {
    let bytes = if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("read database from stdin")?;
        bytes
    } else {
        std::fs::read(path).with_context(|| format!("read database {}", path.display()))?
    };
    let collection =
        decode_collection(&bytes).with_context(|| format!("decode database {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        categories = collection.category.len(),
        packages = collection
            .category
            .iter()
            .map(|category| category.package.len())
            .sum::<usize>(),
        "loaded database"
    );
    Ok(collection)
}

pub fn decode_collection(bytes: &[u8]) -> Result<Collection> {
    serde_json::from_slice(bytes).context("parse collection JSON")
}

/// Render the whole collection as pretty JSON.
pub fn dump_collection(collection: &Collection) -> Result<String> {
    serde_json::to_string_pretty(collection).context("serialize collection")
}
