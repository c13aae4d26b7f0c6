//! JSON file catalogs.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::SourceError;
use crate::source::Catalog;

/// Message catalogs stored as JSON files on disk.
///
/// Layout is one file per (language, category):
/// `<base>/<language>/<category>.json`, holding a flat object from source
/// string to translated string:
///
/// ```json
/// {
///     "@metadata": { "authors": ["..."] },
///     "cucumber|cucumbers": "огурец|огурца|огурцов",
///     "Hello, {name}!": "Привет, {name}!"
/// }
/// ```
///
/// Keys starting with `@` are metadata and skipped; non-string values are
/// skipped as well. A file that does not exist is an empty table - only a
/// file that exists but cannot be read or parsed is an error.
pub struct FileCatalog {
    base: PathBuf,
}

impl FileCatalog {
    /// A catalog rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        FileCatalog { base: base.into() }
    }

    fn catalog_path(&self, category: &str, language: &str) -> PathBuf {
        self.base.join(language).join(format!("{category}.json"))
    }
}

impl Catalog for FileCatalog {
    fn load(
        &self,
        category: &str,
        language: &str,
    ) -> Result<HashMap<String, String>, SourceError> {
        let path = self.catalog_path(category, language);
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&path).map_err(|e| SourceError::Io {
            path: path.clone(),
            source: e,
        })?;

        let json: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| SourceError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let object = json.as_object().ok_or_else(|| SourceError::Parse {
            path: path.clone(),
            message: "root must be an object".to_string(),
        })?;

        let mut messages = HashMap::new();
        for (key, value) in object {
            if key.starts_with('@') {
                continue;
            }
            if let Some(text) = value.as_str() {
                messages.insert(key.clone(), text.to_string());
            }
        }
        Ok(messages)
    }
}
