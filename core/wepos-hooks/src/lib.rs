//! Extension points for WePOS.
//!
//! Collaborators subscribe callbacks to a hook point instead of patching the
//! code that owns the value:
//! - [`FilterChain<T>`]: transforms a value before it is consumed
//!   (settings sections, settings fields)
//! - [`ActionHook<C>`]: runs side effects against a context object
//!   (registering POS assets)
//!
//! Callbacks run by ascending priority. Callbacks sharing a priority run in
//! the order they were added. [`DEFAULT_PRIORITY`] matches the host default.

mod action;
mod filter;

pub use action::ActionHook;
pub use filter::FilterChain;

/// Priority used when a subscriber has no ordering requirement.
pub const DEFAULT_PRIORITY: i32 = 10;
