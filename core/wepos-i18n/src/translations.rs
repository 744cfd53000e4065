use std::collections::{BTreeMap, HashMap};

/// Header carrying the plural selection expression.
pub const PLURAL_FORMS_HEADER: &str = "Plural-Forms";

/// Separates a message context from its msgid inside a key.
pub(crate) const CONTEXT_SEPARATOR: char = '\u{4}';

/// One translated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub context: Option<String>,
    pub singular: String,
    pub plural: Option<String>,
    /// One string per plural form; a single element for non-plural messages.
    pub translations: Vec<String>,
}

impl TranslationEntry {
    pub fn new(singular: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            context: None,
            singular: singular.into(),
            plural: None,
            translations: vec![translation.into()],
        }
    }

    /// Lookup key: `context\u{4}singular`, or just `singular`.
    pub fn key(&self) -> String {
        match &self.context {
            Some(ctx) => format!("{ctx}{CONTEXT_SEPARATOR}{}", self.singular),
            None => self.singular.clone(),
        }
    }
}

/// A message catalog for one text domain.
///
/// Entries keep the order they were added in. Adding an entry whose key is
/// already present replaces it without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    headers: BTreeMap<String, String>,
    entries: Vec<TranslationEntry>,
    index: HashMap<String, usize>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Parses a `Key: Value` header block, one header per line.
    pub(crate) fn set_headers_from_block(&mut self, block: &str) {
        for line in block.lines() {
            if let Some((name, value)) = line.split_once(':') {
                self.set_header(name.trim(), value.trim());
            }
        }
    }

    pub fn add_entry(&mut self, entry: TranslationEntry) {
        let key = entry.key();
        match self.index.get(&key) {
            Some(&at) => self.entries[at] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.index.get(key).map(|&at| &self.entries[at])
    }

    pub fn entries(&self) -> impl Iterator<Item = &TranslationEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = TranslationEntry> {
        self.entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translated text for `msgid`, or `msgid` itself when there is none.
    pub fn translate<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.get(msgid)
            .and_then(|e| e.translations.first())
            .filter(|t| !t.is_empty())
            .map(String::as_str)
            .unwrap_or(msgid)
    }

    /// Copies every entry of `other` into `self`, overwriting on key
    /// collision. Headers of `self` are kept.
    pub fn merge_from(&mut self, other: &Translations) {
        for entry in other.entries() {
            self.add_entry(entry.clone());
        }
    }
}
