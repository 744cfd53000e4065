//! Asset isolation for POS pages.
//!
//! The page head runs four phases in a fixed order, each only on POS
//! requests:
//!
//! | priority | phase |
//! |---|---|
//! | 7 | drop every stylesheet the site registered |
//! | 8 | drop every script the site registered |
//! | 999 | fire `wepos_enqueue_scripts` so the POS bundle registers itself |
//! | 1000 | print the queued stylesheets |
//!
//! The footer then prints the queued scripts.

use crate::assets::AssetRegistry;
use crate::query::QueryVars;
use std::sync::Arc;
use tracing::debug;
use wepos_hooks::{ActionHook, DEFAULT_PRIORITY};

/// Name of the hook the POS bundle registers its assets from.
pub const ENQUEUE_SCRIPTS_HOOK: &str = "wepos_enqueue_scripts";

pub const RESET_STYLES_PRIORITY: i32 = 7;
pub const RESET_SCRIPTS_PRIORITY: i32 = 8;
pub const ENQUEUE_PRIORITY: i32 = 999;
pub const PRINT_STYLES_PRIORITY: i32 = 1000;

/// Render context of one page: the request, its private asset registries,
/// the data handed to the client application, and the markup produced so far.
#[derive(Debug)]
pub struct PosPage {
    pub query: QueryVars,
    pub assets: AssetRegistry,
    pub boot_data: serde_json::Value,
    pub head: String,
    pub footer: String,
}

impl PosPage {
    pub fn new(query: QueryVars, assets: AssetRegistry, boot_data: serde_json::Value) -> Self {
        Self {
            query,
            assets,
            boot_data,
            head: String::new(),
            footer: String::new(),
        }
    }
}

/// Whether the site toolbar may be shown. Never on POS pages.
pub fn show_admin_bar(query: &QueryVars) -> bool {
    !query.is_pos_request()
}

/// The page-head phases, with `enqueue` fired at [`ENQUEUE_PRIORITY`].
pub fn head_actions(enqueue: Arc<ActionHook<PosPage>>) -> ActionHook<PosPage> {
    let mut head = ActionHook::new("wp_head");
    head.add_action(RESET_STYLES_PRIORITY, reset_head_style);
    head.add_action(RESET_SCRIPTS_PRIORITY, reset_head_scripts);
    head.add_action(ENQUEUE_PRIORITY, move |page: &mut PosPage| {
        if page.query.is_pos_request() {
            enqueue.fire(page);
        }
    });
    head.add_action(PRINT_STYLES_PRIORITY, print_styles);
    head
}

/// The page-footer phase: print the queued scripts.
pub fn footer_actions() -> ActionHook<PosPage> {
    let mut footer = ActionHook::new("wp_footer");
    footer.add_action(DEFAULT_PRIORITY, print_scripts);
    footer
}

fn reset_head_style(page: &mut PosPage) {
    if page.query.is_pos_request() {
        debug!(dropped = page.assets.styles.registered_len(), "Resetting styles");
        page.assets.styles.reset();
    }
}

fn reset_head_scripts(page: &mut PosPage) {
    if page.query.is_pos_request() {
        debug!(dropped = page.assets.scripts.registered_len(), "Resetting scripts");
        page.assets.scripts.reset();
    }
}

fn print_styles(page: &mut PosPage) {
    if page.query.is_pos_request() {
        let tags = page.assets.print_styles();
        page.head.push_str(&tags);
    }
}

fn print_scripts(page: &mut PosPage) {
    if page.query.is_pos_request() {
        let tags = page.assets.print_scripts();
        page.footer.push_str(&tags);
    }
}
