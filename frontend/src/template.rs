//! POS application shell.

use crate::error::FrontendResult;
use handlebars::Handlebars;
use serde_json::json;

/// Shell used when no template file is configured.
///
/// `{{lang}}` and `{{title}}` are HTML-escaped; the triple-stash markup slots
/// are inserted as-is.
pub const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="{{lang}}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
{{{head}}}</head>
<body class="wepos-pos">
<div id="wepos-app"></div>
{{{footer}}}</body>
</html>
"#;

const SHELL_TEMPLATE: &str = "shell";

/// Values substituted into the shell template.
#[derive(Debug, Default)]
pub struct ShellSlots<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub head: &'a str,
    pub footer: &'a str,
}

/// A compiled shell template.
pub struct Shell {
    handlebars: Handlebars<'static>,
}

impl Shell {
    /// Compiles `template`. A template that does not parse is an error.
    pub fn new(template: &str) -> FrontendResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string(SHELL_TEMPLATE, template)?;
        Ok(Self { handlebars })
    }

    /// Renders the shell in a single pass, so slot values are never read
    /// back as placeholders.
    pub fn render(&self, slots: &ShellSlots<'_>) -> FrontendResult<String> {
        let data = json!({
            "lang": slots.lang.replace('_', "-"),
            "title": slots.title,
            "head": slots.head,
            "footer": slots.footer,
        });
        Ok(self.handlebars.render(SHELL_TEMPLATE, &data)?)
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrontendError;

    fn render(title: &str, head: &str) -> String {
        Shell::new(DEFAULT_SHELL)
            .unwrap()
            .render(&ShellSlots {
                lang: "fr_FR",
                title,
                head,
                footer: "<script id='y'></script>\n",
            })
            .unwrap()
    }

    fn title_of(html: &str) -> &str {
        let start = html.find("<title>").unwrap() + "<title>".len();
        let end = html.find("</title>").unwrap();
        &html[start..end]
    }

    #[test]
    fn fills_every_slot() {
        let html = render("Caf<e> POS", "<link id='x'>\n");
        assert!(html.contains(r#"<html lang="fr-FR">"#));
        assert_eq!(title_of(&html), "Caf&lt;e&gt; POS");
        assert!(html.contains("<link id='x'>"));
        assert!(html.contains("<script id='y'></script>"));
        assert!(!html.contains("{{"));
        assert!(!html.contains("wpadminbar"));
    }

    #[test]
    fn placeholder_text_in_title_stays_text() {
        let html = render("Cafe {{head}} {{{footer}}} POS", "<link rel='stylesheet' id='x-css' />\n");

        let title = title_of(&html);
        assert!(!title.contains('<'), "{title}");
        assert!(title.contains("{{head}}"));
        assert_eq!(html.matches("id='x-css'").count(), 1);
        assert_eq!(html.matches("<script id='y'>").count(), 1);
    }

    #[test]
    fn unparsable_template_is_an_error() {
        assert!(matches!(
            Shell::new("<title>{{#if title}}</title>").unwrap_err(),
            FrontendError::Template(_)
        ));
    }
}
