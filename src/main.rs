use clap::Parser;
use watch_ledger::core::ConfigProvider;
use watch_ledger::utils::{logger, validation::Validate};
use watch_ledger::{CliConfig, Contract, FileLedger, WatchContract};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting watch-ledger CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let ledger = FileLedger::new(config.ledger_path().to_string());
    let contract = WatchContract::new(ledger);

    match contract.invoke(&config.function, &config.args).await {
        Ok(payload) => {
            if payload.is_empty() {
                println!("OK");
            } else {
                println!("{}", String::from_utf8_lossy(&payload));
            }
        }
        Err(e) => {
            tracing::error!("Invocation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
