//! Frontend configuration, read from `wepos.toml`.
//!
//! Every key is optional. A missing file means the defaults; a file that
//! exists but does not parse is an error.

use crate::error::{FrontendError, FrontendResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;
use wepos_i18n::LocaleContext;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Site title; also the default receipt header.
    pub site_name: String,
    /// Absolute base URL of the site, used to build redirects.
    pub home_url: String,
    /// Path of the "my account" (login) page.
    pub myaccount_path: String,
    /// Pretty URL that is rewritten to `?wcpos=true`.
    pub pos_path: String,
    /// Static site served for non-POS requests.
    pub site_dir: Option<PathBuf>,
    /// POS shell template; the built-in shell is used when unset.
    pub template_path: Option<PathBuf>,
    /// Translation catalogs shipped with the POS application.
    pub languages_dir: PathBuf,
    /// Runtime translation catalogs, `<dir>/<domain>-<locale>.mo`.
    pub host_languages_dir: Option<PathBuf>,
    /// Product catalog JSON.
    pub catalog_path: Option<PathBuf>,
    pub text_domain: String,
    pub locale: LocaleConfig,
    pub auth: AuthConfig,
    /// Assets the site theme registers on every page.
    pub host_assets: AssetsConfig,
    /// Assets of the POS application bundle.
    pub pos_assets: AssetsConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            site_name: "WePOS".to_string(),
            home_url: "http://localhost:4010".to_string(),
            myaccount_path: "/my-account/".to_string(),
            pos_path: "/pos".to_string(),
            site_dir: None,
            template_path: None,
            languages_dir: PathBuf::from("languages"),
            host_languages_dir: None,
            catalog_path: None,
            text_domain: "wepos".to_string(),
            locale: LocaleConfig::default(),
            auth: AuthConfig::default(),
            host_assets: AssetsConfig::default(),
            pos_assets: AssetsConfig::pos_bundle(),
        }
    }
}

impl FrontendConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> FrontendResult<Self> {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| FrontendError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> FrontendResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Absolute URL of the "my account" page.
    pub fn myaccount_url(&self) -> String {
        join_url(&self.home_url, &self.myaccount_path)
    }

    /// Absolute URL of the JSON API root.
    pub fn api_root(&self) -> String {
        join_url(&self.home_url, "/api/v1")
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub site: String,
    pub user: Option<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            site: "en_US".to_string(),
            user: None,
        }
    }
}

impl LocaleConfig {
    pub fn context(&self, is_admin: bool) -> LocaleContext {
        LocaleContext {
            site_locale: self.site.clone(),
            user_locale: self.user.clone(),
            is_admin,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Cookie carrying the session token.
    pub cookie_name: String,
    /// Session tokens that count as logged in.
    pub sessions: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "wepos_session".to_string(),
            sessions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub styles: Vec<AssetSpec>,
    pub scripts: Vec<AssetSpec>,
}

impl AssetsConfig {
    /// The POS application bundle as shipped.
    pub fn pos_bundle() -> Self {
        Self {
            styles: vec![AssetSpec::new("wepos-style", "/assets/css/style.css")],
            scripts: vec![
                AssetSpec::new("wepos-vendor", "/assets/js/vendor.js"),
                AssetSpec {
                    deps: vec!["wepos-vendor".to_string()],
                    ..AssetSpec::new("wepos-app", "/assets/js/app.js")
                },
            ],
        }
    }
}

/// One stylesheet or script registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSpec {
    pub handle: String,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub deps: Vec<String>,
    #[serde(default)]
    pub ver: Option<String>,
    /// Stylesheet media query.
    #[serde(default)]
    pub media: Option<String>,
}

impl AssetSpec {
    pub fn new(handle: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            src: Some(src.into()),
            deps: Vec::new(),
            ver: None,
            media: None,
        }
    }
}
