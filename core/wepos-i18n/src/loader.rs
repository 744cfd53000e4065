//! Plugin-shipped translation lookup.

use crate::mo::read_mo_file;
use crate::translations::Translations;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Catalog names that never describe a plain locale.
const IGNORED_PREFIXES: [&str; 3] = ["continents-cities", "ms-", "admin-"];

/// `<domain>-<locale>`, the stem of a plugin catalog file.
pub fn mo_file_name(domain: &str, locale: &str) -> String {
    format!("{domain}-{locale}")
}

/// Stems of the `.mo` files in `dir`, sorted. A missing directory has none.
pub fn available_languages(dir: &Path) -> Vec<String> {
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        debug!(dir = %dir.display(), "Language directory not readable");
        return Vec::new();
    };

    let mut languages: Vec<String> = read_dir
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension()? != "mo" {
                return None;
            }
            path.file_stem()?.to_str().map(str::to_string)
        })
        .filter(|stem| !IGNORED_PREFIXES.iter().any(|p| stem.starts_with(p)))
        .collect();
    languages.sort();
    languages
}

/// The plugin's own catalog for one locale.
#[derive(Debug, Clone, Default)]
pub struct PluginTranslations {
    /// Headers of the catalog, when one was loaded.
    pub header: Option<BTreeMap<String, String>>,
    pub translations: Translations,
}

/// Loads `<language_dir>/<domain>-<locale>.mo` if it is present.
///
/// Never fails: a missing file gives an empty result, and an unreadable or
/// corrupt one is logged and also gives an empty result.
pub fn translations_for_plugin_domain(
    domain: &str,
    language_dir: &Path,
    locale: &str,
) -> PluginTranslations {
    let name = mo_file_name(domain, locale);
    let path = language_dir.join(format!("{name}.mo"));

    if !available_languages(language_dir).contains(&name) || !path.is_file() {
        debug!(domain, locale, path = %path.display(), "No plugin catalog for locale");
        return PluginTranslations::default();
    }

    match read_mo_file(&path) {
        Ok(translations) => {
            debug!(domain, locale, entries = translations.len(), "Loaded plugin catalog");
            PluginTranslations {
                header: Some(translations.headers().clone()),
                translations,
            }
        }
        Err(e) => {
            warn!(path = %path.display(), "Ignoring unusable plugin catalog: {}", e);
            PluginTranslations::default()
        }
    }
}
