//! Bank Account Validator Server Entry Point

use bank_validator::cli::{check_config, Cli, Commands};
use bank_validator::config::ServiceSettings;
use bank_validator::{logging, server, AppState};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::CheckConfig(args)) => match check_config::execute(args.into()) {
            Ok(summary) => print!("{}", summary),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Some(Commands::Serve(args)) => {
            init_logging();
            run_server(args.into()).await;
        }
        None => {
            // No subcommand - default to serve
            init_logging();
            run_server(ServiceSettings::from_env()).await;
        }
    }
}

fn init_logging() {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }
}

async fn run_server(settings: ServiceSettings) {
    info!("Bank Account Validator v{}", env!("CARGO_PKG_VERSION"));

    // 設定不備は起動時に致命的エラーとする
    let config = match settings.into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };

    for provider in state.registry.all() {
        info!(provider = %provider.name, endpoint = %provider.endpoint, "Provider configured");
    }

    if let Err(e) = server::run(state, &config.bind_addr()).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
