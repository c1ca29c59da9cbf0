//! Minimal vector scene: painted paths, text boxes, groups, and the
//! placement operators glyphs use to position themselves.

pub mod node;
pub mod place;
