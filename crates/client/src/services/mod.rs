//! Stateless pure-logic helpers.
//!
//! Nothing in this module performs I/O; the functions are consumed both by
//! the repositories and directly by callers building request parameters or
//! editing form state.

pub mod filters;
pub mod set_editor;
pub mod validation;

pub use filters::{Pagination, PriceBounds, paginate, parse_numeric_param, parse_price_range};
pub use set_editor::{SetEditor, size_editor, tag_editor};
