//! Presentation layer for advocate-directory
//!
//! This crate contains CLI definitions, the console table formatter,
//! progress indicators, and the interactive directory browser.

pub mod cli;
pub mod output;
pub mod progress;
pub mod table;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{BrowseArgs, Cli, Command, ListArgs, OutputArg, ServeArgs, SourceArgs};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::FetchSpinner;
pub use table::{Column, advocate_columns};
pub use tui::BrowseApp;
