use crate::error::I18nResult;
use crate::loader::mo_file_name;
use crate::mo::read_mo_file;
use crate::translations::Translations;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Text domains loaded into the runtime, keyed by domain name.
#[derive(Debug, Default)]
pub struct TextDomains {
    domains: HashMap<String, Translations>,
    empty: Translations,
}

impl TextDomains {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `translations` to `domain`.
    ///
    /// When the domain is already loaded, entries loaded earlier win over
    /// the new ones on key collision, while the headers are those of the
    /// newly added set.
    pub fn insert(&mut self, domain: impl Into<String>, translations: Translations) {
        let domain = domain.into();
        let merged = match self.domains.remove(&domain) {
            Some(existing) => {
                let mut merged = translations;
                merged.merge_from(&existing);
                merged
            }
            None => translations,
        };
        self.domains.insert(domain, merged);
    }

    /// Loads a `.mo` file into `domain`.
    pub fn load(&mut self, domain: &str, path: &Path) -> I18nResult<()> {
        let translations = read_mo_file(path)?;
        info!(domain, path = %path.display(), entries = translations.len(), "Loaded text domain");
        self.insert(domain, translations);
        Ok(())
    }

    /// Loads `<dir>/<domain>-<locale>.mo` when it exists. Returns whether a
    /// catalog was loaded.
    pub fn load_from_dir(&mut self, domain: &str, dir: &Path, locale: &str) -> I18nResult<bool> {
        let path = dir.join(format!("{}.mo", mo_file_name(domain, locale)));
        if !path.is_file() {
            debug!(domain, locale, path = %path.display(), "No runtime catalog");
            return Ok(false);
        }
        self.load(domain, &path)?;
        Ok(true)
    }

    /// The catalog for `domain`; empty when nothing was loaded for it.
    pub fn translations_for_domain(&self, domain: &str) -> &Translations {
        self.domains.get(domain).unwrap_or(&self.empty)
    }

    pub fn is_loaded(&self, domain: &str) -> bool {
        self.domains.contains_key(domain)
    }

    pub fn unload(&mut self, domain: &str) -> bool {
        self.domains.remove(domain).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translations::TranslationEntry;

    #[test]
    fn unknown_domain_is_empty() {
        let domains = TextDomains::new();
        assert!(domains.translations_for_domain("wepos").is_empty());
        assert!(!domains.is_loaded("wepos"));
    }

    #[test]
    fn earlier_load_wins_on_collision() {
        let mut first = Translations::new();
        first.add_entry(TranslationEntry::new("Yes", "Oui"));
        let mut second = Translations::new();
        second.add_entry(TranslationEntry::new("Yes", "Ouais"));
        second.add_entry(TranslationEntry::new("No", "Non"));

        let mut domains = TextDomains::new();
        domains.insert("wepos", first);
        domains.insert("wepos", second);

        let t = domains.translations_for_domain("wepos");
        assert_eq!(t.translate("Yes"), "Oui");
        assert_eq!(t.translate("No"), "Non");
    }

    #[test]
    fn newer_load_keeps_its_own_headers() {
        let mut first = Translations::new();
        first.set_header("Language", "fr_FR");
        first.set_header("X-Generator", "Poedit 2.0");
        first.add_entry(TranslationEntry::new("Yes", "Oui"));
        let mut second = Translations::new();
        second.set_header("Language", "fr_CA");

        let mut domains = TextDomains::new();
        domains.insert("wepos", first);
        domains.insert("wepos", second);

        let t = domains.translations_for_domain("wepos");
        assert_eq!(t.header("Language"), Some("fr_CA"));
        assert_eq!(t.header("X-Generator"), None);
        assert_eq!(t.translate("Yes"), "Oui");
    }

    #[test]
    fn unload_forgets_domain() {
        let mut domains = TextDomains::new();
        domains.insert("wepos", Translations::new());
        assert!(domains.unload("wepos"));
        assert!(!domains.unload("wepos"));
    }
}
