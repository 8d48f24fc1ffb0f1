//! CLI command definitions

use advocates_domain::{MAX_LIMIT, OutputFormat};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the `list` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Aligned table with pagination controls
    Table,
    /// The page as JSON
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Table => OutputFormat::Table,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for advocate-directory
#[derive(Parser, Debug)]
#[command(name = "advocate-directory")]
#[command(author, version, about = "Browse and serve a directory of patient advocates")]
#[command(long_about = r#"
Advocate Directory serves a paginated list of advocates over HTTP and lets you
browse it from the terminal.

Commands:
  serve    Run the listing API (GET /api/advocates?page=&limit=)
  list     Fetch one page and print it
  browse   Interactive browser with search-as-you-type

Configuration files are loaded from (in priority order):
1. ADVOCATES_* environment variables
2. --config <path>     Explicit config file
3. ./advocates.toml    Project-level config
4. ~/.config/advocate-directory/config.toml   Global config

Example:
  advocate-directory serve --port 8080
  advocate-directory list --page 2 --search anxiety
  advocate-directory browse --local
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the listing API server
    Serve(ServeArgs),
    /// Fetch one page of the directory and print it
    List(ListArgs),
    /// Browse the directory interactively
    Browse(BrowseArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// JSON roster to serve instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,
}

/// Where client commands get their pages from
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Read the roster in-process instead of calling the API
    #[arg(long)]
    pub local: bool,

    /// JSON roster for --local (built-in roster otherwise)
    #[arg(long, value_name = "PATH", requires = "local")]
    pub seed: Option<PathBuf>,

    /// API base URL (overrides client.base_url)
    #[arg(long, value_name = "URL", conflicts_with = "local")]
    pub url: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Advocates per page (overrides client.page_size)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=MAX_LIMIT))]
    pub limit: Option<u64>,

    /// Only show rows of the page matching this term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output format (overrides output.format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Advocates per page (overrides client.page_size)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=MAX_LIMIT))]
    pub limit: Option<u64>,

    #[command(flatten)]
    pub source: SourceArgs,
}
