//! In-memory catalogs for tests and embedded message tables.

use std::collections::HashMap;

use crate::error::SourceError;
use crate::plural::canonical_id;
use crate::source::Catalog;

/// A catalog built up in code.
///
/// # Example
///
/// ```
/// use lingo::{Catalog, MemoryCatalog};
///
/// let mut catalog = MemoryCatalog::new();
/// catalog
///     .add("de", "app", "Hello", "Hallo")
///     .add("de", "app", "Goodbye", "Tschüss");
///
/// let table = catalog.load("app", "de").unwrap();
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    /// Tables keyed `"{language}.{category}"`.
    tables: HashMap<String, HashMap<String, String>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        MemoryCatalog::default()
    }

    /// Add one translation to a (language, category) table.
    pub fn add(
        &mut self,
        language: &str,
        category: &str,
        message: &str,
        translation: &str,
    ) -> &mut Self {
        let key = format!("{}.{category}", canonical_id(language));
        self.tables
            .entry(key)
            .or_default()
            .insert(message.to_string(), translation.to_string());
        self
    }
}

impl Catalog for MemoryCatalog {
    fn load(
        &self,
        category: &str,
        language: &str,
    ) -> Result<HashMap<String, String>, SourceError> {
        let key = format!("{language}.{category}");
        Ok(self.tables.get(&key).cloned().unwrap_or_default())
    }
}
