//! Placeholder resolution
//!
//! Resolution happens in two stages so each can be tested on its own:
//! [`extract_placeholders`] finds the distinct `[...]` tokens of a template
//! and derives their lookup keys, then [`substitute`] swaps tokens for
//! values.

pub mod placeholders;
pub mod render;

pub use placeholders::{extract_placeholders, placeholder_key, Placeholder};
pub use render::{render_template, substitute, RenderReport, TEMPLATE_NOT_FOUND};
