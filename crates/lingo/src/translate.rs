//! The message-resolution orchestrator.
//!
//! [`Translate`] is an explicit context value carrying the source/target
//! languages and the named message sources. It is constructed by the caller
//! and threaded through calls; there is no process-wide state. A `Translate`
//! with no sources still works - every lookup is then a miss and messages
//! render from their source text.

use std::collections::HashMap;

use bon::Builder;

use crate::choice::choose;
use crate::plural::{canonical_id, plural_rules};
use crate::source::MessageSource;
use crate::substitute::substitute;
use crate::types::Params;

/// Name of the default message source.
pub const DEFAULT_SOURCE: &str = "messages";
/// Source used for the library's own messages (the `core` category).
pub const CORE_SOURCE: &str = "core_messages";
/// Category reserved for the library's own messages.
pub const CORE_CATEGORY: &str = "core";

/// Translation context: languages plus a registry of named message sources.
///
/// # Example
///
/// ```
/// use lingo::{MemoryCatalog, MessageSource, Translate};
///
/// let mut catalog = MemoryCatalog::new();
/// catalog.add("ru", "app", "cucumber|cucumbers", "огурец|огурца|огурцов");
///
/// let mut t = Translate::builder().language("ru").build();
/// t.add_source("messages", MessageSource::new(catalog, "en_us"));
///
/// assert_eq!(t.t("app", "cucumber|cucumbers", 1), "огурец");
/// assert_eq!(t.t("app", "cucumber|cucumbers", 3), "огурца");
/// assert_eq!(t.t("app", "cucumber|cucumbers", 5), "огурцов");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Translate {
    /// Language the application's messages are written in.
    #[builder(default = "en_us".to_string())]
    source_language: String,

    /// Language the application displays to end users. Defaults to the
    /// source language, which also makes every lookup a no-op.
    language: Option<String>,

    /// Named message sources.
    #[builder(skip)]
    sources: HashMap<String, MessageSource>,
}

impl Default for Translate {
    fn default() -> Self {
        Translate::builder().build()
    }
}

impl Translate {
    /// Create a context with default settings (source language `en_us`, no
    /// sources).
    pub fn new() -> Self {
        Self::default()
    }

    /// The language messages are written in.
    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// The language the application is targeted to.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(&self.source_language)
    }

    /// Change the target language. `None` reverts to the source language.
    pub fn set_language(&mut self, language: Option<impl Into<String>>) {
        self.language = language.map(|l| canonical_id(&l.into()));
    }

    /// Register a message source under a name.
    pub fn add_source(&mut self, name: &str, source: MessageSource) -> &mut Self {
        self.sources.insert(name.to_string(), source);
        self
    }

    /// Typed accessor for a named source.
    pub fn source(&self, name: &str) -> Option<&MessageSource> {
        self.sources.get(name)
    }

    /// Translate and format with the default source and target language.
    pub fn t(&self, category: &str, message: &str, params: impl Into<Params>) -> String {
        self.translate(category, message, params.into(), None, None)
    }

    /// Translate `message` in `category`, apply plural selection, and
    /// substitute placeholders.
    ///
    /// `source` picks a named message source; by default the `core`
    /// category uses `core_messages` and everything else uses `messages`.
    /// An unregistered source name just skips lookup - the message then
    /// renders from its source text. `language` overrides the context's
    /// target language for this call.
    ///
    /// This never fails: missing translations, malformed conditions, and
    /// variant/rule count mismatches all degrade to a displayable string.
    pub fn translate(
        &self,
        category: &str,
        message: &str,
        params: Params,
        source: Option<&str>,
        language: Option<&str>,
    ) -> String {
        let target = canonical_id(language.unwrap_or_else(|| self.language()));

        let source_name = source.unwrap_or(if category == CORE_CATEGORY {
            CORE_SOURCE
        } else {
            DEFAULT_SOURCE
        });
        let resolved = match self.sources.get(source_name) {
            Some(src) => src.translate(category, message, &target),
            None => message.to_string(),
        };

        let bag = params.into_bag();

        let selected = if bag.quantity().is_some() && resolved.contains('|') {
            let rules = plural_rules(&target);
            choose(&resolved, bag.numeric_quantity(), &rules).to_string()
        } else {
            resolved
        };

        substitute(&selected, &bag)
    }
}
