//! Shared server state.

use crate::assets::AssetRegistry;
use crate::auth::{Authenticator, CookieSessions};
use crate::config::{AssetsConfig, FrontendConfig};
use crate::error::{FrontendError, FrontendResult};
use crate::isolator::{ENQUEUE_SCRIPTS_HOOK, PosPage, footer_actions, head_actions};
use crate::query::QueryVars;
use crate::template::{DEFAULT_SHELL, Shell, ShellSlots};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use wepos_hooks::{ActionHook, DEFAULT_PRIORITY};
use wepos_i18n::{LocaleBundle, TextDomains, Translations, jed_locale_data};
use wepos_model::{Catalog, SelectOption, Term, post_type_options};
use wepos_settings::{SettingsFields, SettingsHooks, SettingsSchema, SettingsSection};

/// Name of the client-side object the boot data is exposed as.
pub const BOOT_OBJECT: &str = "wepos";

/// Everything a request handler reads. Immutable once the server runs.
pub struct AppState {
    pub config: FrontendConfig,
    pub catalog: Catalog,
    pub text_domains: TextDomains,
    pub settings_hooks: SettingsHooks,
    auth: Box<dyn Authenticator>,
    head: ActionHook<PosPage>,
    footer: ActionHook<PosPage>,
    shell: Shell,
}

/// Collects hook subscribers before the state is frozen.
pub struct AppStateBuilder {
    config: FrontendConfig,
    catalog: Catalog,
    text_domains: TextDomains,
    settings_hooks: SettingsHooks,
    enqueue_scripts: ActionHook<PosPage>,
    auth: Box<dyn Authenticator>,
    shell: Shell,
}

impl AppState {
    /// Loads the catalog, translations and template named by `config`.
    pub fn builder(config: FrontendConfig) -> FrontendResult<AppStateBuilder> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::default(),
        };

        let mut text_domains = TextDomains::new();
        if let Some(dir) = &config.host_languages_dir {
            let locale = config.locale.context(false);
            let loaded = text_domains.load_from_dir(&config.text_domain, dir, locale.active_locale());
            match loaded {
                Ok(true) => {}
                Ok(false) => info!(dir = %dir.display(), "No runtime translations for site locale"),
                Err(e) => warn!(dir = %dir.display(), "Ignoring runtime translations: {}", e),
            }
        }

        let shell = match &config.template_path {
            Some(path) => {
                let template = std::fs::read_to_string(path).map_err(|source| FrontendError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                Shell::new(&template)?
            }
            None => Shell::new(DEFAULT_SHELL)?,
        };

        let mut enqueue_scripts = ActionHook::new(ENQUEUE_SCRIPTS_HOOK);
        enqueue_scripts.add_action(DEFAULT_PRIORITY, register_pos_bundle(config.pos_assets.clone()));

        Ok(AppStateBuilder {
            auth: Box::new(CookieSessions::from_config(&config.auth)),
            config,
            catalog,
            text_domains,
            settings_hooks: SettingsHooks::default(),
            enqueue_scripts,
            shell,
        })
    }

    pub fn from_config(config: FrontendConfig) -> FrontendResult<Self> {
        Ok(Self::builder(config)?.build())
    }

    pub fn is_logged_in(&self, headers: &axum::http::HeaderMap) -> bool {
        self.auth.is_logged_in(headers)
    }

    /// Runtime translations of the POS text domain.
    pub fn translations(&self) -> &Translations {
        self.text_domains.translations_for_domain(&self.config.text_domain)
    }

    pub fn settings_sections(&self) -> Vec<SettingsSection> {
        wepos_settings::settings_sections(self.translations(), &self.settings_hooks)
    }

    pub fn settings_fields(&self) -> SettingsFields {
        wepos_settings::settings_fields(self.translations(), &self.config.site_name, &self.settings_hooks)
    }

    pub fn settings_schema(&self) -> SettingsSchema {
        SettingsSchema::build(self.translations(), &self.config.site_name, &self.settings_hooks)
    }

    pub fn locale_bundle(&self, is_admin: bool) -> LocaleBundle {
        jed_locale_data(
            &self.config.text_domain,
            &self.config.languages_dir,
            &self.config.locale.context(is_admin),
            &self.text_domains,
        )
    }

    pub fn product_categories(&self) -> Vec<Term> {
        self.catalog.product_categories()
    }

    pub fn post_type_options(&self, post_type: &str) -> Vec<SelectOption> {
        post_type_options(&self.catalog.posts, post_type, self.translations().translate("- select -"))
    }

    /// Data the POS application boots from.
    pub fn boot_data(&self) -> serde_json::Value {
        json!({
            "rest": { "root": self.config.api_root() },
            "settings": self.settings_schema(),
            "locale": self.locale_bundle(false),
            "categories": self.product_categories(),
        })
    }

    /// Renders the POS shell for a POS request.
    pub fn render_pos_page(&self, query: QueryVars) -> FrontendResult<String> {
        let mut page = PosPage::new(
            query,
            AssetRegistry::seeded(&self.config.host_assets),
            self.boot_data(),
        );
        self.head.fire(&mut page);
        self.footer.fire(&mut page);

        let title = format!("{} POS", self.config.site_name);
        let locale = self.config.locale.context(false);
        self.shell.render(&ShellSlots {
            lang: locale.active_locale(),
            title: &title,
            head: &page.head,
            footer: &page.footer,
        })
    }
}

impl AppStateBuilder {
    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Subscribers of `wepos_settings_sections` / `wepos_settings_fields`.
    pub fn settings_hooks_mut(&mut self) -> &mut SettingsHooks {
        &mut self.settings_hooks
    }

    /// Subscribers of `wepos_enqueue_scripts`. The POS bundle is already
    /// registered at the default priority.
    pub fn enqueue_scripts_mut(&mut self) -> &mut ActionHook<PosPage> {
        &mut self.enqueue_scripts
    }

    pub fn text_domains_mut(&mut self) -> &mut TextDomains {
        &mut self.text_domains
    }

    pub fn authenticator(mut self, auth: impl Authenticator + 'static) -> Self {
        self.auth = Box::new(auth);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            head: head_actions(Arc::new(self.enqueue_scripts)),
            footer: footer_actions(),
            config: self.config,
            catalog: self.catalog,
            text_domains: self.text_domains,
            settings_hooks: self.settings_hooks,
            auth: self.auth,
            shell: self.shell,
        }
    }
}

/// Registers and enqueues the POS bundle, then attaches the boot data to its
/// last script.
fn register_pos_bundle(assets: AssetsConfig) -> impl Fn(&mut PosPage) + Send + Sync + 'static {
    move |page| {
        page.assets.register_all(&assets);
        if let Some(last) = assets.scripts.last() {
            page.assets
                .scripts
                .localize(&last.handle, BOOT_OBJECT, &page.boot_data);
        }
    }
}
