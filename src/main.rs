//! Photo-Search
//!
//! This is the main entry point for the application.

use anyhow::Result;
use photo_search::{
    config,
    network::HttpClient,
    providers::ProviderRegistry,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let Some(config_path) = parse_args()? else {
        return Ok(());
    };

    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Photo-Search v{}", photo_search::VERSION);

    // Load configuration
    let settings = config::load(config_path.as_deref())?;

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!(
        "HTTP client initialized (timeout {:?})",
        client.timeout()
    );

    // Build provider registry
    let registry = ProviderRegistry::from_settings(&settings.providers);
    for id in registry.missing_credentials() {
        warn!(
            "No credential for {} ({} is not set); its searches will fail",
            id,
            id.credential_env()
        );
    }

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state and router
    let state = AppState::new(settings, registry, client)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Returns the optional settings path, or `None` when the process should exit
fn parse_args() -> Result<Option<Option<PathBuf>>> {
    let mut config_path = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("{} requires a file argument", arg))?;
                config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-V" | "--version" => {
                println!("photo-search {}", photo_search::VERSION);
                return Ok(None);
            }
            other => anyhow::bail!("unknown argument: {} (try --help)", other),
        }
    }

    Ok(Some(config_path))
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
Photo-Search v{}
Search Unsplash, Pexels, Pixabay and Flickr from a single form

USAGE:
    photo-search [OPTIONS]

OPTIONS:
    -c, --config <FILE>    Path to configuration file
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    UNSPLASH_ACCESS_KEY         Unsplash access key
    PEXELS_API_KEY              Pexels API key
    PIXABAY_API_KEY             Pixabay API key
    FLICKR_API_KEY              Flickr API key
    PORT                        Server port (default 3000)
    PHOTO_SEARCH_BIND_ADDRESS   Bind address
    PHOTO_SEARCH_TIMEOUT        Provider request timeout in seconds
    PHOTO_SEARCH_SETTINGS_PATH  Path to settings.yml
    RUST_LOG                    Log filter (default info)
"#,
        photo_search::VERSION
    );
}
