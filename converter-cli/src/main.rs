//! Converter CLI
//!
//! Command-line interface for the currency converter API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use converter_client::ConverterClient;

#[derive(Parser)]
#[command(name = "converter")]
#[command(author, version, about = "Currency converter API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the converter API
    #[arg(long, env = "CONVERTER_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        /// Source currency code (e.g. USD)
        from: String,
        /// Target currency code (e.g. EUR)
        to: String,
        /// Amount in the source currency
        amount: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ConverterClient::new(&cli.url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Convert { from, to, amount } => {
            let result = client.convert(&from, &to, amount.as_str()).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
