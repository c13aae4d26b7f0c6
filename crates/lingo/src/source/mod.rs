//! Message storage backends.
//!
//! A [`Catalog`] loads the raw (source string → translated string) table for
//! a (category, language) pair; [`MessageSource`] wraps a catalog with the
//! translation discipline: per-(language, category) caching, the
//! force-translation flag, and fall-back-to-source on every miss. The core
//! engine only ever talks to a `MessageSource`.

mod file;
mod memory;

use std::cell::RefCell;
use std::collections::HashMap;

pub use file::FileCatalog;
pub use memory::MemoryCatalog;

use crate::error::SourceError;
use crate::plural::canonical_id;

/// Loads message tables for (category, language) pairs.
///
/// Implementations own storage and parsing; caching and miss handling live
/// in [`MessageSource`]. A category that simply does not exist should be an
/// empty table, not an error - errors are for broken storage.
pub trait Catalog {
    /// Load the message table for a category in a language.
    fn load(
        &self,
        category: &str,
        language: &str,
    ) -> Result<HashMap<String, String>, SourceError>;
}

/// A translation backend: a catalog plus caching and miss discipline.
///
/// Tables are cached per `(language, category)` with interior mutability,
/// so `translate` stays `&self` and the catalog is consulted at most once
/// per distinct pair. Any shared use across threads is the embedder's
/// concern; the source itself carries no synchronization.
///
/// # Example
///
/// ```
/// use lingo::{MemoryCatalog, MessageSource};
///
/// let mut catalog = MemoryCatalog::new();
/// catalog.add("ru", "app", "Hello", "Привет");
/// let source = MessageSource::new(catalog, "en_us");
///
/// assert_eq!(source.translate("app", "Hello", "ru"), "Привет");
/// // Misses fall back to the original message.
/// assert_eq!(source.translate("app", "Goodbye", "ru"), "Goodbye");
/// // Source language matches: no lookup at all.
/// assert_eq!(source.translate("app", "Hello", "en_us"), "Hello");
/// ```
pub struct MessageSource {
    catalog: Box<dyn Catalog>,
    /// Language the source messages are written in, canonical form.
    language: String,
    /// Translate even when the target equals the source language.
    force_translation: bool,
    /// Loaded tables keyed `"{language}.{category}"`.
    cache: RefCell<HashMap<String, HashMap<String, String>>>,
}

impl MessageSource {
    /// Wrap a catalog whose source messages are written in `language`.
    pub fn new(catalog: impl Catalog + 'static, language: &str) -> Self {
        MessageSource {
            catalog: Box::new(catalog),
            language: canonical_id(language),
            force_translation: false,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Re-invoke lookup even when source and target languages match.
    pub fn with_force_translation(mut self, force: bool) -> Self {
        self.force_translation = force;
        self
    }

    /// The language this source's messages are written in.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Translate a message, returning it unchanged when translation is not
    /// needed or not available.
    ///
    /// Translation is skipped entirely when the target language equals the
    /// source language, unless force-translation is set.
    pub fn translate(&self, category: &str, message: &str, language: &str) -> String {
        let target = canonical_id(language);
        if self.force_translation || target != self.language {
            self.translate_message(category, message, &target)
        } else {
            message.to_string()
        }
    }

    /// Eagerly load a (category, language) table into the cache.
    ///
    /// `translate` swallows catalog errors (a broken catalog must not break
    /// rendering); this is the hook for tooling that wants to see them.
    /// Returns the number of entries loaded.
    pub fn preload(&self, category: &str, language: &str) -> Result<usize, SourceError> {
        let target = canonical_id(language);
        let table = self.catalog.load(category, &target)?;
        let count = table.len();
        self.cache
            .borrow_mut()
            .insert(cache_key(&target, category), table);
        Ok(count)
    }

    /// Look up the translated message, loading the table on first use.
    /// Empty translations count as missing.
    fn translate_message(&self, category: &str, message: &str, language: &str) -> String {
        let key = cache_key(language, category);
        let mut cache = self.cache.borrow_mut();
        let table = cache.entry(key).or_insert_with(|| {
            self.catalog
                .load(category, language)
                .unwrap_or_default()
        });
        match table.get(message) {
            Some(translated) if !translated.is_empty() => translated.clone(),
            _ => message.to_string(),
        }
    }
}

fn cache_key(language: &str, category: &str) -> String {
    format!("{language}.{category}")
}
