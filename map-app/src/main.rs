//! Terminal map explorer built on the route-nexus framework.

mod app;
mod pages;
mod routes;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context as _;
use clap::Parser;
use route_nexus::Application;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::Root;
use crate::routes::create_app_router;

const DEFAULT_FILTER: &str = "map_app=info,route_nexus=info";

#[derive(Parser, Debug)]
#[command(name = "map-app")]
#[command(about = "Browse the map views through their routes", long_about = None)]
struct Cli {
    /// Prefix all routes are mounted under
    #[arg(long, env = "BASE_URL", default_value = "/")]
    base_url: String,

    /// Full URL to open at startup, base included
    #[arg(long)]
    url: Option<String>,

    /// Print the route table and exit
    #[arg(long)]
    list: bool,

    /// Print the route matched by a full URL and exit
    #[arg(long, value_name = "URL")]
    resolve: Option<String>,

    /// Write logs to this file while the terminal UI runs
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = !cli.list && cli.resolve.is_none();
    init_tracing(cli.log_file.as_ref(), interactive)?;

    let mut router = create_app_router(&cli.base_url)
        .with_context(|| format!("building router for base url '{}'", cli.base_url))?;
    tracing::info!(base = %router.base(), routes = router.routes().len(), "route table ready");

    if cli.list {
        for entry in router.routes() {
            println!("{}\t{}\t{}", entry.name(), entry.path(), router.href(entry.name())?);
        }
        return Ok(());
    }

    if let Some(url) = &cli.resolve {
        match router.resolve(url) {
            Some(entry) => println!("{}", entry.name()),
            None => println!("no match: {url}"),
        }
        return Ok(());
    }

    if let Some(url) = &cli.url {
        let matched = router.visit(url).map(|entry| entry.name().to_string());
        tracing::info!(url = %url, route = ?matched, "deep link");
    }

    let app = Application::new();
    app.run(move |cx| {
        cx.set_root(Root::new(router))?;
        Ok(())
    })
}

/// Logs go to stderr for one-shot commands and to `log_file` (or nowhere) for the TUI.
fn init_tracing(log_file: Option<&PathBuf>, interactive: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    match (log_file, interactive) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        (None, false) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        // The terminal belongs to the UI; without a log file there is nowhere to write.
        (None, true) => {}
    }
    Ok(())
}
