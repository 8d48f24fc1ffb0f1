//! Presentation-neutral configuration values shared by the CLI and
//! the config file loader.

mod output_format;

pub use output_format::OutputFormat;
