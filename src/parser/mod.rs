use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::value::RawValue;
use tracing::debug;

use crate::error::{AllocgenError, Result};
use crate::model::{AllocationDataset, AllocationEntry, Category, JsonKind};

/// Anything that can produce a dataset for a path.
///
/// The pipeline only talks to this trait so tests can hand it fixtures
/// without touching the filesystem.
pub trait DatasetLoader {
    fn load(&self, path: &Path) -> Result<AllocationDataset>;
}

/// Reads the dataset from a JSON file on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFileLoader;

impl DatasetLoader for JsonFileLoader {
    fn load(&self, path: &Path) -> Result<AllocationDataset> {
        let json = fs::read_to_string(path).map_err(|e| AllocgenError::reading(path, e))?;
        debug!("File loaded, size: {} bytes", json.len());
        parse_dataset(&json)
    }
}

/// Parse the whole input JSON string into an `AllocationDataset`.
///
/// The file must be a single object whose values are arrays of entry
/// objects. Key order is kept as written, and every field is kept as the
/// raw token found in the file.
pub fn parse_dataset(json: &str) -> Result<AllocationDataset> {
    let root: &RawValue = serde_json::from_str(json).map_err(|source| AllocgenError::Json {
        context: "allocation dataset".into(),
        source,
    })?;

    let kind = JsonKind::of(root);
    if kind != JsonKind::Object {
        return Err(AllocgenError::DataFormat(format!(
            "top level must be an object of categories, found {kind}"
        )));
    }

    let groups: IndexMap<String, &RawValue> =
        serde_json::from_str(root.get()).map_err(|source| AllocgenError::Json {
            context: "allocation categories".into(),
            source,
        })?;

    let mut categories = Vec::with_capacity(groups.len());
    for (name, group) in groups {
        let entries = parse_category(&name, group)?;
        debug!("Category `{}`: {} entries", name, entries.len());
        categories.push(Category::new(name, entries));
    }

    Ok(AllocationDataset::new(categories))
}

// ─────────────────────────────────────────────────────
/// Helper: turn one category's array into typed entries.
fn parse_category(name: &str, group: &RawValue) -> Result<Vec<AllocationEntry>> {
    let kind = JsonKind::of(group);
    if kind != JsonKind::Array {
        return Err(AllocgenError::DataFormat(format!(
            "category `{name}` must be an array, found {kind}"
        )));
    }

    let items: Vec<&RawValue> = serde_json::from_str(group.get())
        .map_err(|e| AllocgenError::DataFormat(format!("category `{name}`: {e}")))?;

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let kind = JsonKind::of(item);
            if kind != JsonKind::Object {
                return Err(AllocgenError::DataFormat(format!(
                    "entry {i} of `{name}` must be an object, found {kind}"
                )));
            }
            serde_json::from_str(item.get())
                .map_err(|e| AllocgenError::DataFormat(format!("entry {i} of `{name}`: {e}")))
        })
        .collect()
}
