//! Settings schema for the WePOS admin screen.
//!
//! Declares which sections and fields the admin UI shows. Nothing here
//! validates or stores values; that is the settings screen's job.
//!
//! Both lists pass through a [`FilterChain`](wepos_hooks::FilterChain) before
//! they are returned, so other components can add, drop or rewrite entries.

mod builder;
mod schema;

pub use builder::{
    GENERAL_SECTION, RECEIPTS_SECTION, SettingsHooks, SettingsSchema, TEXT_DOMAIN,
    settings_fields, settings_sections,
};
pub use schema::{FieldType, SettingsField, SettingsFields, SettingsSection};
