//! Renderers for block-level elements.

pub(crate) mod blockquote;
pub(crate) mod heading;
pub(crate) mod paragraph;
pub(crate) mod preformatted;
pub(crate) mod table;
