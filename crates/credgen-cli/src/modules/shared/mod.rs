mod format_table;
mod render;

pub(crate) use format_table::format_list_table;
pub(crate) use render::{render_listing_json, render_outcome, Rendered};
