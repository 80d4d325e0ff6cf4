use std::process::ExitCode;

use charter_seed::{cli::Cli, config::Config, startup};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("hint: {}", e.remediation());
            return ExitCode::FAILURE;
        }
    };

    match charter_seed::cli::run(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            if let Some(hint) = e.remediation() {
                eprintln!("hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
