//! Output formatting for the `list` command

pub mod console;

pub use console::ConsoleFormatter;
