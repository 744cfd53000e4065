//! Jed-style locale bundles.
//!
//! Serialized shape:
//!
//! ```json
//! {
//!   "domain": "wepos",
//!   "locale_data": {
//!     "wepos": {
//!       "": { "domain": "wepos", "lang": "fr_FR", "plural_forms": "nplurals=2; plural=(n > 1);" },
//!       "Receipts": ["Reçus"]
//!     }
//!   }
//! }
//! ```

use crate::domains::TextDomains;
use crate::loader::translations_for_plugin_domain;
use crate::locale::LocaleContext;
use crate::translations::PLURAL_FORMS_HEADER;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// The `""` entry of a domain's locale data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleHeader {
    pub domain: String,
    pub lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_forms: Option<String>,
}

/// A merged catalog for one domain, ready to hand to a client runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBundle {
    pub domain: String,
    pub header: LocaleHeader,
    messages: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl LocaleBundle {
    pub fn new(header: LocaleHeader) -> Self {
        Self {
            domain: header.domain.clone(),
            header,
            messages: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Sets the translations for `key`. An existing key keeps its position.
    pub fn insert(&mut self, key: String, translations: Vec<String>) {
        match self.index.get(&key) {
            Some(&at) => self.messages[at].1 = translations,
            None => {
                self.index.insert(key.clone(), self.messages.len());
                self.messages.push((key, translations));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index.get(key).map(|&at| self.messages[at].1.as_slice())
    }

    pub fn messages(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

struct DomainData<'a>(&'a LocaleBundle);

impl Serialize for DomainData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.messages.len() + 1))?;
        map.serialize_entry("", &self.0.header)?;
        for (key, translations) in &self.0.messages {
            map.serialize_entry(key, translations)?;
        }
        map.end()
    }
}

struct LocaleData<'a>(&'a LocaleBundle);

impl Serialize for LocaleData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.domain, &DomainData(self.0))?;
        map.end()
    }
}

impl Serialize for LocaleBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("LocaleBundle", 2)?;
        s.serialize_field("domain", &self.domain)?;
        s.serialize_field("locale_data", &LocaleData(self))?;
        s.end()
    }
}

/// Builds the locale bundle for `domain`.
///
/// Plugin-shipped entries from `language_dir` come first; entries the
/// runtime has loaded for the domain overwrite them on key collision and
/// append otherwise. `plural_forms` comes from the runtime catalog when it
/// has one, else from the plugin catalog.
pub fn jed_locale_data(
    domain: &str,
    language_dir: &Path,
    locale: &LocaleContext,
    runtime: &TextDomains,
) -> LocaleBundle {
    let lang = locale.active_locale();
    let plugin = translations_for_plugin_domain(domain, language_dir, lang);
    let host = runtime.translations_for_domain(domain);

    let plural_forms = host
        .header(PLURAL_FORMS_HEADER)
        .filter(|v| !v.is_empty())
        .or_else(|| {
            plugin
                .header
                .as_ref()
                .and_then(|h| h.get(PLURAL_FORMS_HEADER))
                .map(String::as_str)
                .filter(|v| !v.is_empty())
        })
        .map(str::to_string);

    let mut bundle = LocaleBundle::new(LocaleHeader {
        domain: domain.to_string(),
        lang: lang.to_string(),
        plural_forms,
    });
    for entry in plugin.translations.entries().chain(host.entries()) {
        bundle.insert(entry.key(), entry.translations.clone());
    }

    debug!(domain, lang, messages = bundle.len(), "Built locale bundle");
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> LocaleHeader {
        LocaleHeader {
            domain: "wepos".into(),
            lang: "fr_FR".into(),
            plural_forms: None,
        }
    }

    #[test]
    fn header_entry_serializes_first() {
        let mut bundle = LocaleBundle::new(header());
        bundle.insert("Yes".into(), vec!["Oui".into()]);

        let json = serde_json::to_string(&bundle).unwrap();
        assert_eq!(
            json,
            r#"{"domain":"wepos","locale_data":{"wepos":{"":{"domain":"wepos","lang":"fr_FR"},"Yes":["Oui"]}}}"#
        );
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut bundle = LocaleBundle::new(header());
        bundle.insert("a".into(), vec!["1".into()]);
        bundle.insert("b".into(), vec!["2".into()]);
        bundle.insert("a".into(), vec!["3".into()]);

        let keys: Vec<_> = bundle.messages().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(bundle.get("a"), Some(&["3".to_string()][..]));
    }
}
