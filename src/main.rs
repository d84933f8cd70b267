// src/main.rs
use std::io;
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use log::debug;
use tron_supply_checker::config::Cli;
use tron_supply_checker::{supply, SupplyError, TronClient};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("{:?}", cli.client_config());

    match check(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn check(cli: &Cli) -> Result<(), SupplyError> {
    let address = cli.contract_address()?;
    let client = TronClient::connect(&cli.client_config()).await?;
    let contract = client.resolve_contract(address).await?;
    supply::check_total_supply(&contract, cli.format(), &mut io::stdout()).await?;
    Ok(())
}
