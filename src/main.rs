//! Command-line front end of the Dimoss catalog.
//!
//! Opens the catalog against the configured endpoint (or a JSON snapshot) and
//! prints rendered pages to stdout. Logs go to stderr.

#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use dimoss_catalog::catalog::CatalogStore;
use dimoss_catalog::contact::inquiry_link;
use dimoss_catalog::runtime::{parse_command, Command, HELP};
use dimoss_catalog::ui::{render_collections_page, render_new_arrivals};
use dimoss_catalog::{CatalogError, Config, Result, Session};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Parser)]
#[command(name = "dimoss-catalog", version, about = "Browse the Dimoss jewellery catalog")]
struct Cli {
    /// Configuration file (defaults to ~/.config/dimoss/config.toml).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override a configuration key; repeatable.
    #[arg(long = "set", global = true, value_name = "KEY=VALUE", value_parser = parse_pair)]
    overrides: Vec<(String, String)>,

    /// Read the catalog from a JSON snapshot instead of the endpoint.
    #[arg(long, global = true, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Render width in columns.
    #[arg(long, global = true, default_value_t = 100)]
    width: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the catalog page for a URL.
    Browse {
        #[arg(default_value = "/catalog")]
        url: String,
    },
    /// Interactive session reading commands from stdin.
    Shell {
        #[arg(default_value = "/catalog")]
        url: String,
    },
    /// Render the New Arrivals page.
    Arrivals,
    /// Render the Collections page.
    Collections,
    /// Print the WhatsApp inquiry link of a product.
    Inquire {
        index: u64,
    },
}

fn parse_pair(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides: BTreeMap<String, String> = cli.overrides.iter().cloned().collect();
    let config = Config::discover(cli.config.as_deref())?.with_pairs(&overrides);
    dimoss_catalog::observability::init_tracing(&config);

    tracing::debug!(command = ?cli.command, "starting");

    let store = Arc::new(CatalogStore::new(config.catalog_source(cli.source.as_deref())?));

    match cli.command {
        Commands::Browse { url } => {
            let mut session = Session::new(dimoss_catalog::initialize(&config), store);
            session.open(&url).await?;
            print!("{}", session.render(cli.width));
            println!("{}", session.current_url());
        }
        Commands::Shell { url } => run_shell(&config, store, &url, cli.width).await?,
        Commands::Arrivals => {
            let products = store.load().await.products();
            let theme = config.resolve_theme();
            print!("{}", render_new_arrivals(&products, &config.storefront(), &theme, cli.width));
        }
        Commands::Collections => {
            let products = store.load().await.products();
            let theme = config.resolve_theme();
            print!("{}", render_collections_page(&products, &config.storefront(), &theme, cli.width));
        }
        Commands::Inquire { index } => {
            let products = store.load().await.products();
            let product = products
                .iter()
                .find(|p| p.index == index)
                .ok_or_else(|| CatalogError::Command(format!("no product with index {index}")))?;
            let storefront = config.storefront();
            println!(
                "{}",
                inquiry_link(&storefront.whatsapp_number, product, &storefront.site_base)
            );
        }
    }

    Ok(())
}

async fn run_shell(config: &Config, store: Arc<CatalogStore>, url: &str, width: usize) -> Result<()> {
    let mut session = Session::new(dimoss_catalog::initialize(config), store);
    session.open(url).await?;
    print!("{}", session.render(width));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        let changed = match command {
            Command::Dispatch(event) => {
                let links_before = session.opened_links().len();
                let toasts_before = session.toasts().len();
                let changed = session.dispatch(event).await?;
                for link in &session.opened_links()[links_before..] {
                    println!("{link}");
                }
                for toast in &session.toasts()[toasts_before..] {
                    eprintln!("{toast}");
                }
                changed
            }
            Command::Back => session.back().await?,
            Command::Forward => session.forward().await?,
            Command::Url => {
                println!("{}", session.current_url());
                false
            }
            Command::Show => true,
            Command::Help => {
                println!("{HELP}");
                false
            }
            Command::Quit => break,
        };

        if changed {
            print!("{}", session.render(width));
        }
    }

    Ok(())
}
