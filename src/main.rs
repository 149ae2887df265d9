use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod client;
mod commands;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::client::{
    HttpConfig, MarketClient, RegisterSellerRequest, SellerListQuery, SellerSource,
    UnregisterSellerRequest,
};
use crate::state::{App, AppConfig, StartupOptions, platform::AppPaths};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter variable, e.g. `LAZYSWAP_LOG=lazyswap=debug`.
const LOG_ENV: &str = "LAZYSWAP_LOG";

const LOGO: &str = r"
██╗      █████╗ ███████╗██╗   ██╗███████╗██╗    ██╗ █████╗ ██████╗
██║     ██╔══██╗╚══███╔╝╚██╗ ██╔╝██╔════╝██║    ██║██╔══██╗██╔══██╗
██║     ███████║  ███╔╝  ╚████╔╝ ███████╗██║ █╗ ██║███████║██████╔╝
██║     ██╔══██║ ███╔╝    ╚██╔╝  ╚════██║██║███╗██║██╔══██║██╔═══╝
███████╗██║  ██║███████╗   ██║   ███████║╚███╔███╔╝██║  ██║██║
╚══════╝╚═╝  ╚═╝╚══════╝   ╚═╝   ╚══════╝ ╚══╝╚══╝ ╚═╝  ╚═╝╚═╝
";

/// lazyswap - Terminal dashboard for the ContextSwap marketplace
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// API base path or absolute URL
    #[arg(long, env = "LAZYSWAP_API_BASE_URL", global = true)]
    api_base: Option<String>,

    /// Origin joined with a relative API base
    #[arg(long, env = "LAZYSWAP_API_ORIGIN", global = true)]
    api_origin: Option<String>,

    /// Initial page, e.g. /dashboard or /transactions/<id>
    #[arg(long)]
    route: Option<String>,

    /// Start with the light theme
    #[arg(long)]
    light: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the backend health status
    Health,
    /// List sellers, or search them by keyword
    Sellers {
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Print one seller
    SellerGet { id: String },
    /// Register a seller
    Register {
        #[arg(long)]
        evm_address: String,
        #[arg(long)]
        price_wei: Option<u128>,
        #[arg(long)]
        price_conflux_wei: Option<u128>,
        #[arg(long)]
        price_tron_sun: Option<u128>,
        #[arg(long)]
        description: Option<String>,
        /// Comma-separated keywords
        #[arg(long, value_delimiter = ',')]
        keywords: Option<Vec<String>>,
        #[arg(long)]
        seller_id: Option<String>,
    },
    /// Unregister a seller by id or EVM address
    Unregister {
        #[arg(long)]
        seller_id: Option<String>,
        #[arg(long)]
        evm_address: Option<String>,
    },
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        init_stderr_logging();
        let client = build_client(cli.api_base.as_deref(), cli.api_origin.as_deref())?;
        return run_command(&client, command).await;
    }

    if let Err(err) = init_file_logging() {
        eprintln!("logging disabled: {err:#}");
    }

    let options = StartupOptions {
        api_base: cli.api_base,
        api_origin: cli.api_origin,
        route: cli.route,
        light: cli.light,
    };
    let mut app = App::new(options)?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    info!("lazyswap exited");
    result
}

// ============================================================================
// Logging
// ============================================================================

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The TUI owns the terminal, so its logs go to `lazyswap.log`.
fn init_file_logging() -> Result<()> {
    let path = AppPaths::new().log_file()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("cannot open {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

// ============================================================================
// Subcommands
// ============================================================================

fn build_client(api_base: Option<&str>, api_origin: Option<&str>) -> Result<MarketClient> {
    let config = AppConfig::load();
    let (base, origin) = config.api_endpoint(api_base, api_origin);
    let http = HttpConfig::with_timeout_secs(config.request_timeout_secs);
    MarketClient::from_parts(&base, &origin, &http).map_err(|e| e.into_report())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_command(client: &MarketClient, command: Commands) -> Result<()> {
    match command {
        Commands::Health => {
            let health = client.health().await.map_err(|e| e.into_report())?;
            println!("{} {}", client.base_url(), health.status);
        }
        Commands::Sellers {
            keyword,
            status,
            limit,
        } => {
            let query = SellerListQuery {
                limit,
                status,
                ..SellerListQuery::default()
            };
            let source = SellerSource::from_keyword(keyword.as_deref().unwrap_or_default(), query);
            let sellers = client
                .fetch_sellers(&source)
                .await
                .map_err(|e| e.into_report())?;
            print_json(&sellers)?;
        }
        Commands::SellerGet { id } => {
            let seller = client.get_seller(&id).await.map_err(|e| e.into_report())?;
            print_json(&seller)?;
        }
        Commands::Register {
            evm_address,
            price_wei,
            price_conflux_wei,
            price_tron_sun,
            description,
            keywords,
            seller_id,
        } => {
            let request = RegisterSellerRequest {
                evm_address,
                price_wei,
                price_conflux_wei,
                price_tron_sun,
                description,
                keywords,
                seller_id,
            };
            let seller = client
                .register_seller(&request)
                .await
                .map_err(|e| e.into_report())?;
            print_json(&seller)?;
        }
        Commands::Unregister {
            seller_id,
            evm_address,
        } => {
            let request = UnregisterSellerRequest {
                seller_id,
                evm_address,
            };
            let seller = client
                .unregister_seller(&request)
                .await
                .map_err(|e| e.into_report())?;
            print_json(&seller)?;
        }
        Commands::Version => {
            println!("{LOGO}");
            println!("lazyswap v{VERSION}");
            println!("A terminal dashboard for the ContextSwap marketplace");
        }
    }
    Ok(())
}
