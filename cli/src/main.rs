//! CLI entrypoint for Advocate Directory
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use advocates_application::{
    BrowseDirectoryUseCase, BrowseParams, BrowseSession, DirectoryGateway,
};
use advocates_domain::OutputFormat;
use advocates_infrastructure::{
    ConfigLoader, FileConfig, HttpDirectoryGateway, InMemoryAdvocateRepository,
    LocalDirectoryGateway, load_roster, serve,
};
use advocates_presentation::{
    BrowseApp, BrowseArgs, Cli, Command, ConsoleFormatter, FetchSpinner, ListArgs, ServeArgs,
    SourceArgs,
};
use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };

    if cli.show_config {
        let sources = if cli.no_config {
            ConfigLoader::describe_defaults_only()
        } else {
            ConfigLoader::describe_sources(cli.config.as_ref())
        };
        println!("{}", sources);
        println!();
        println!("Effective configuration:");
        println!("{}", ConfigLoader::render(&config)?);
        return Ok(());
    }

    config.validate().context("Invalid configuration")?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // The browser owns the terminal; it may only log to a file
    let console_logs = !matches!(command, Command::Browse(_));
    let log_dir = config.logging.directory_path();
    let _log_guard = logging::init_logging(cli.verbose, log_dir.as_deref(), console_logs)
        .context("Failed to initialise logging")?;

    info!("Starting Advocate Directory");

    match command {
        Command::Serve(args) => run_serve(&config, args).await,
        Command::List(args) => run_list(&config, args).await,
        Command::Browse(args) => run_browse(&config, args).await,
    }
}

async fn run_serve(config: &FileConfig, args: ServeArgs) -> Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    let seed = args.seed.or_else(|| server.seed.as_ref().map(PathBuf::from));

    let repository = Arc::new(InMemoryAdvocateRepository::new(load_roster(
        seed.as_deref(),
    )?));
    info!(advocates = repository.len(), "Roster loaded");

    // Ctrl-C triggers graceful shutdown
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let addr = server
        .resolve()
        .await
        .with_context(|| format!("Cannot resolve server host '{}'", server.host))?;

    serve(repository, addr, shutdown, |addr| {
        println!("Advocate directory API listening on http://{addr}/api/advocates");
    })
    .await?;

    Ok(())
}

async fn run_list(config: &FileConfig, args: ListArgs) -> Result<()> {
    let params = browse_params(config, args.limit);
    let format = args
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    ConsoleFormatter::set_color(config.output.color);

    if args.source.local {
        let gateway = local_gateway(args.source.seed.as_deref())?;
        list_with(gateway, params, &args, format).await
    } else {
        let gateway = http_gateway(config, &args.source)?;
        list_with(gateway, params, &args, format).await
    }
}

async fn list_with<G: DirectoryGateway + 'static>(
    gateway: Arc<G>,
    params: BrowseParams,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<()> {
    let use_case = BrowseDirectoryUseCase::new(gateway, params);
    let mut session = BrowseSession::new();

    let spinner = FetchSpinner::new(!args.quiet && format == OutputFormat::Table);
    spinner.start(format!("Fetching page {}", args.page));
    use_case.load_page(&mut session, args.page).await?;
    spinner.finish();

    if let Some(error) = session.error() {
        bail!("{error}");
    }
    if let Some(term) = &args.search {
        session.set_search(term.as_str());
    }

    let output = match format {
        OutputFormat::Table => ConsoleFormatter::format(&session),
        OutputFormat::Json => ConsoleFormatter::format_json(&session),
    };
    println!("{}", output);

    Ok(())
}

async fn run_browse(config: &FileConfig, args: BrowseArgs) -> Result<()> {
    let params = browse_params(config, args.limit);

    if args.source.local {
        let gateway = local_gateway(args.source.seed.as_deref())?;
        BrowseApp::new(BrowseDirectoryUseCase::new(gateway, params))
            .run()
            .await?;
    } else {
        let gateway = http_gateway(config, &args.source)?;
        BrowseApp::new(BrowseDirectoryUseCase::new(gateway, params))
            .run()
            .await?;
    }

    Ok(())
}

fn browse_params(config: &FileConfig, limit: Option<u64>) -> BrowseParams {
    let params = config.client.browse_params();
    match limit {
        Some(limit) => params.with_page_size(limit),
        None => params,
    }
}

fn local_gateway(
    seed: Option<&Path>,
) -> Result<Arc<LocalDirectoryGateway<InMemoryAdvocateRepository>>> {
    let repository = Arc::new(InMemoryAdvocateRepository::new(load_roster(seed)?));
    Ok(Arc::new(LocalDirectoryGateway::new(repository)))
}

fn http_gateway(config: &FileConfig, source: &SourceArgs) -> Result<Arc<HttpDirectoryGateway>> {
    let base_url = source.url.as_deref().unwrap_or(&config.client.base_url);
    let gateway = HttpDirectoryGateway::new(base_url, config.client.timeout())?;
    info!(endpoint = gateway.endpoint(), "Using listing API");
    Ok(Arc::new(gateway))
}
