//! Per-request stylesheet and script registries.
//!
//! A page starts from the registrations the site theme makes, may reset
//! them, registers and enqueues its own assets, then prints the queue. Each
//! registry lives for one rendered page only.

use crate::config::{AssetSpec, AssetsConfig};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// A registered stylesheet or script.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub handle: String,
    /// `None` registers an alias that only pulls in its dependencies.
    pub src: Option<String>,
    pub deps: Vec<String>,
    pub ver: Option<String>,
    pub media: Option<String>,
    /// Inline script printed before the tag.
    pub extra: Option<String>,
}

impl From<&AssetSpec> for Asset {
    fn from(spec: &AssetSpec) -> Self {
        Self {
            handle: spec.handle.clone(),
            src: spec.src.clone(),
            deps: spec.deps.clone(),
            ver: spec.ver.clone(),
            media: spec.media.clone(),
            extra: None,
        }
    }
}

impl Asset {
    /// `src` with `?ver=` appended when a version is set.
    pub fn url(&self) -> Option<String> {
        let src = self.src.as_deref()?;
        Some(match &self.ver {
            Some(ver) => {
                let sep = if src.contains('?') { '&' } else { '?' };
                format!("{src}{sep}ver={ver}")
            }
            None => src.to_string(),
        })
    }
}

/// One kind of asset (styles or scripts): registrations, queue, and what has
/// been printed already.
#[derive(Debug, Default)]
pub struct Dependencies {
    registered: HashMap<String, Asset>,
    queue: Vec<String>,
    done: HashSet<String>,
}

impl Dependencies {
    /// Registers `asset`. An existing registration under the same handle is
    /// kept and `false` is returned.
    pub fn register(&mut self, asset: Asset) -> bool {
        if self.registered.contains_key(&asset.handle) {
            debug!(handle = %asset.handle, "Asset already registered");
            return false;
        }
        self.registered.insert(asset.handle.clone(), asset);
        true
    }

    pub fn enqueue(&mut self, handle: &str) {
        if !self.queue.iter().any(|h| h == handle) {
            self.queue.push(handle.to_string());
        }
    }

    /// Attaches `var <object_name> = <data>;` ahead of a registered script.
    pub fn localize(&mut self, handle: &str, object_name: &str, data: &serde_json::Value) -> bool {
        let Some(asset) = self.registered.get_mut(handle) else {
            warn!(handle, "Cannot localize unregistered asset");
            return false;
        };
        // Keep `</script>` inside JSON strings from closing the tag.
        let json = data.to_string().replace("</", "<\\/");
        let line = format!("var {object_name} = {json};");
        asset.extra = Some(match asset.extra.take() {
            Some(existing) => format!("{existing}\n{line}"),
            None => line,
        });
        true
    }

    /// Drops every registration, the queue and the printed set.
    pub fn reset(&mut self) {
        self.registered.clear();
        self.queue.clear();
        self.done.clear();
    }

    pub fn is_registered(&self, handle: &str) -> bool {
        self.registered.contains_key(handle)
    }

    pub fn is_enqueued(&self, handle: &str) -> bool {
        self.queue.iter().any(|h| h == handle)
    }

    pub fn get(&self, handle: &str) -> Option<&Asset> {
        self.registered.get(handle)
    }

    pub fn registered_len(&self) -> usize {
        self.registered.len()
    }

    /// Queued assets not yet printed, dependencies first, each once.
    ///
    /// A handle whose dependency chain reaches an unregistered handle is left
    /// out. The returned handles are marked printed.
    pub fn take_printable(&mut self) -> Vec<Asset> {
        let mut order = Vec::new();
        let mut visiting = HashSet::new();
        for handle in self.queue.clone() {
            self.visit(&handle, &mut visiting, &mut order);
        }
        for asset in &order {
            self.done.insert(asset.handle.clone());
        }
        order
    }

    /// Appends `handle` after its dependencies. Returns whether it resolved.
    fn visit(
        &self,
        handle: &str,
        visiting: &mut HashSet<String>,
        order: &mut Vec<Asset>,
    ) -> bool {
        if self.done.contains(handle) || order.iter().any(|a| a.handle == handle) {
            return true;
        }
        let Some(asset) = self.registered.get(handle) else {
            warn!(handle, "Skipping unregistered asset");
            return false;
        };
        if !visiting.insert(handle.to_string()) {
            warn!(handle, "Dependency cycle");
            return false;
        }
        let resolved = asset
            .deps
            .iter()
            .all(|dep| self.visit(dep, visiting, order));
        visiting.remove(handle);
        if !resolved {
            warn!(handle, "Skipping asset with missing dependencies");
            return false;
        }
        order.push(asset.clone());
        true
    }
}

/// Styles and scripts for one page.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    pub styles: Dependencies,
    pub scripts: Dependencies,
}

impl AssetRegistry {
    /// Registers and enqueues everything in `assets`.
    pub fn seeded(assets: &AssetsConfig) -> Self {
        let mut registry = Self::default();
        registry.register_all(assets);
        registry
    }

    pub fn register_all(&mut self, assets: &AssetsConfig) {
        for spec in &assets.styles {
            self.styles.register(Asset::from(spec));
            self.styles.enqueue(&spec.handle);
        }
        for spec in &assets.scripts {
            self.scripts.register(Asset::from(spec));
            self.scripts.enqueue(&spec.handle);
        }
    }

    /// `<link>` tags for every queued stylesheet not printed yet.
    pub fn print_styles(&mut self) -> String {
        let mut out = String::new();
        for asset in self.styles.take_printable() {
            let Some(url) = asset.url() else { continue };
            out.push_str(&format!(
                "<link rel='stylesheet' id='{}-css' href='{}' media='{}' />\n",
                esc_attr(&asset.handle),
                esc_attr(&url),
                esc_attr(asset.media.as_deref().unwrap_or("all")),
            ));
        }
        out
    }

    /// `<script>` tags for every queued script not printed yet, each
    /// preceded by its localized data.
    pub fn print_scripts(&mut self) -> String {
        let mut out = String::new();
        for asset in self.scripts.take_printable() {
            if let Some(extra) = &asset.extra {
                out.push_str(&format!(
                    "<script id='{}-js-extra'>\n{}\n</script>\n",
                    esc_attr(&asset.handle),
                    extra
                ));
            }
            if let Some(url) = asset.url() {
                out.push_str(&format!(
                    "<script src='{}' id='{}-js'></script>\n",
                    esc_attr(&url),
                    esc_attr(&asset.handle),
                ));
            }
        }
        out
    }
}

/// Escapes a value for a single- or double-quoted HTML attribute.
pub fn esc_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
