//! TUI (Text User Interface) module for advocate-directory
//!
//! Interactive directory browser built on ratatui: a search box filtering
//! the current page as you type, the advocate table, a pagination bar and a
//! status bar.

mod app;
mod event;
mod mode;
mod state;
mod widgets;

pub use app::BrowseApp;
pub use event::FetchEvent;
pub use mode::{KeyAction, KeyHandler};
pub use state::TuiState;
pub use widgets::{
    BrowseLayout, PaginationWidget, SearchWidget, StatusBarWidget, TableWidget,
};
