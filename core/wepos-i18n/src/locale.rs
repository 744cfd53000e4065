use serde::{Deserialize, Serialize};

/// Locale selection inputs for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleContext {
    /// Site-wide locale, used on public pages.
    pub site_locale: String,
    /// The viewer's own locale preference, if they set one.
    #[serde(default)]
    pub user_locale: Option<String>,
    /// Whether the request is for an admin screen.
    #[serde(default)]
    pub is_admin: bool,
}

impl LocaleContext {
    pub fn site(locale: impl Into<String>) -> Self {
        Self {
            site_locale: locale.into(),
            user_locale: None,
            is_admin: false,
        }
    }

    /// Admin screens follow the viewer's locale; everything else the site's.
    pub fn active_locale(&self) -> &str {
        if self.is_admin {
            self.user_locale
                .as_deref()
                .filter(|l| !l.is_empty())
                .unwrap_or(&self.site_locale)
        } else {
            &self.site_locale
        }
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::site("en_US")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_uses_site_locale() {
        let ctx = LocaleContext {
            site_locale: "de_DE".into(),
            user_locale: Some("fr_FR".into()),
            is_admin: false,
        };
        assert_eq!(ctx.active_locale(), "de_DE");
    }

    #[test]
    fn admin_uses_user_locale() {
        let ctx = LocaleContext {
            site_locale: "de_DE".into(),
            user_locale: Some("fr_FR".into()),
            is_admin: true,
        };
        assert_eq!(ctx.active_locale(), "fr_FR");
    }

    #[test]
    fn admin_without_preference_uses_site_locale() {
        let ctx = LocaleContext {
            is_admin: true,
            ..LocaleContext::site("nl_NL")
        };
        assert_eq!(ctx.active_locale(), "nl_NL");
    }
}
