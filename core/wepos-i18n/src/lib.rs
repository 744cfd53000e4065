//! Translation loading for WePOS.
//!
//! - [`parse_mo`] / [`read_mo_file`]: GNU gettext machine-object reader
//! - [`Translations`]: ordered message catalog with headers
//! - [`TextDomains`]: the runtime's loaded text domains
//! - [`LocaleContext`]: picks the active locale for a request
//! - [`translations_for_plugin_domain`]: the plugin-shipped catalog, if any
//! - [`jed_locale_data`]: merged catalog shaped for a Jed-style client runtime
//!
//! Missing translation files are never an error at the bundle level: the
//! caller gets an empty catalog. The MO reader itself reports why a file
//! could not be used.

mod domains;
mod error;
mod jed;
mod loader;
mod locale;
mod mo;
mod translations;

pub use domains::TextDomains;
pub use error::{I18nError, I18nResult};
pub use jed::{LocaleBundle, LocaleHeader, jed_locale_data};
pub use loader::{PluginTranslations, available_languages, mo_file_name, translations_for_plugin_domain};
pub use locale::LocaleContext;
pub use mo::{MO_MAGIC, parse_mo, read_mo_file};
pub use translations::{PLURAL_FORMS_HEADER, TranslationEntry, Translations};
