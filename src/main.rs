//! Explorer Backend - API Server Launcher
//!
//! Run modes:
//!   cargo run -- api [--port <port>]   - Start the REST API
//!   cargo run -- help                  - Show usage

use std::env;

use explorer_backend::api;
use explorer_backend::config::ExplorerConfig;
use explorer_backend::logging;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "api" => run_api_server(&args[2..]).await,
        "help" | "--help" | "-h" => print_usage(),
        _ => print_usage(),
    }
}

fn print_usage() {
    println!("Explorer Backend - Address API Service");
    println!();
    println!("Usage:");
    println!("  explorer-api api [--port <port>]   Start REST API server (default: 4004)");
    println!();
    println!("Environment Variables:");
    println!("  EXPLORER_NETWORK                \"mainnet\" or \"testnet\"");
    println!("  EXPLORER_GATEWAY_URL            Chain gateway RPC endpoint");
    println!("  EXPLORER_API_PORT               REST API port");
    println!("  EXPLORER_GATEWAY_TIMEOUT_SECS   Per-request gateway timeout");
    println!("  EXPLORER_LOG_LEVEL              debug, info, warn, error");
    println!("  EXPLORER_LOG_JSON               \"1\" to force JSON logs");
}

/// Start REST API server
async fn run_api_server(args: &[String]) {
    let mut config = match ExplorerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return;
        }
    };

    // Parse arguments
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" if i + 1 < args.len() => {
                config.api_port = args[i + 1].parse().unwrap_or(config.api_port);
                i += 2;
            }
            _ => i += 1,
        }
    }

    if let Err(e) = logging::init_from_config(&config) {
        eprintln!("Logging error: {}", e);
        return;
    }

    config.print_summary();

    if let Err(e) = api::start_server(&config).await {
        eprintln!("API server error [{}]: {}", e.error_code(), e);
    }
}
