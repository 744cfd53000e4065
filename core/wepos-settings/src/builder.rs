use crate::schema::{SettingsField, SettingsFields, SettingsSection};
use serde::Serialize;
use wepos_hooks::FilterChain;
use wepos_i18n::Translations;

/// Text domain the built-in labels are translated from.
pub const TEXT_DOMAIN: &str = "wepos";

pub const GENERAL_SECTION: &str = "wepos_general";
pub const RECEIPTS_SECTION: &str = "wepos_receipts";

/// Filters applied to the built-in schema before it is returned.
#[derive(Debug)]
pub struct SettingsHooks {
    pub sections: FilterChain<Vec<SettingsSection>>,
    pub fields: FilterChain<SettingsFields>,
}

impl Default for SettingsHooks {
    fn default() -> Self {
        Self {
            sections: FilterChain::new("wepos_settings_sections"),
            fields: FilterChain::new("wepos_settings_fields"),
        }
    }
}

/// Settings screen tabs.
pub fn settings_sections(i18n: &Translations, hooks: &SettingsHooks) -> Vec<SettingsSection> {
    let sections = vec![
        SettingsSection::new(
            GENERAL_SECTION,
            i18n.translate("General"),
            "dashicons-admin-generic",
        ),
        SettingsSection::new(
            RECEIPTS_SECTION,
            i18n.translate("Receipts"),
            "dashicons-media-text",
        ),
    ];
    hooks.sections.apply(sections)
}

/// Fields of every tab. `blogname` is the receipt header default.
pub fn settings_fields(i18n: &Translations, blogname: &str, hooks: &SettingsHooks) -> SettingsFields {
    let mut fields = SettingsFields::new();

    fields.insert(
        GENERAL_SECTION,
        SettingsField::select(
            "enable_fee_tax",
            i18n.translate("Calculate tax for Fee"),
            i18n.translate("Choose if tax caluclate for fee in POS cart and checkout"),
            "yes",
            [("yes", i18n.translate("Yes")), ("no", i18n.translate("No"))],
        ),
    );
    fields.insert(
        RECEIPTS_SECTION,
        SettingsField::text(
            "receipt_header",
            i18n.translate("Order receipt header"),
            i18n.translate("Enter your order receipt header"),
            blogname,
        ),
    );
    fields.insert(
        RECEIPTS_SECTION,
        SettingsField::text(
            "receipt_footer",
            i18n.translate("Order receipt footer"),
            i18n.translate("Enter your order receipt footer text"),
            i18n.translate("Thank you"),
        ),
    );

    hooks.fields.apply(fields)
}

/// Sections and fields together, as the admin screen consumes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSchema {
    pub sections: Vec<SettingsSection>,
    pub fields: SettingsFields,
}

impl SettingsSchema {
    pub fn build(i18n: &Translations, blogname: &str, hooks: &SettingsHooks) -> Self {
        Self {
            sections: settings_sections(i18n, hooks),
            fields: settings_fields(i18n, blogname, hooks),
        }
    }
}
