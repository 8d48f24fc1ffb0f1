//! Table model shared by the console formatter and the interactive browser
//!
//! [`Column`] describes how one field of a row is rendered; [`NavItem`]s
//! describe the pagination controls under the table.

pub mod columns;
pub mod navigation;

pub use columns::{Column, EMPTY_MESSAGE, advocate_columns, cell_lines, column_widths};
pub use navigation::{NavItem, NavKind, navigation_items};
