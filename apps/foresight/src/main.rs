use anyhow::{bail, Context};
use chrono::Local;
use clap::{Parser, Subcommand};
use config::Config;
use data_fetcher::{fetch_historical_data, suggestions};
use dotenv::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;
use render::{series_table, suggestions_table, PredictionOutput};
use seyeon_coingecko::CoingeckoClient;
use seyeon_forecast::{ForecastError, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;
mod config;
mod data_fetcher;
mod render;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest coins matching a free-text query (at least 2 characters)
    Search { query: String },

    /// Show one price per day for the recent history of a coin
    History {
        /// CoinGecko coin id (e.g. bitcoin)
        coin: String,

        /// Days of history to fetch (default: $FORESIGHT_HISTORY_DAYS or 15)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Generate a simulated 30-day projection and its summary
    Predict {
        /// CoinGecko coin id (e.g. bitcoin)
        coin: String,

        /// Days of history to fetch (default: $FORESIGHT_HISTORY_DAYS or 15)
        #[arg(long)]
        days: Option<u32>,

        /// Seed for a reproducible projection
        #[arg(long)]
        seed: Option<u64>,

        /// Print history, projection and report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Fetches `coin` and installs its daily series into the session.
async fn load_history(
    session: &mut Session,
    client: &CoingeckoClient,
    config: &Config,
    coin: &str,
    days: u32,
) -> anyhow::Result<()> {
    let ticket = session.begin_load();
    let samples = fetch_historical_data(client, coin, &config.vs_currency, days).await?;

    if !session.apply_history(ticket, samples) {
        bail!("History for '{coin}' was superseded by a newer request");
    }

    Ok(())
}

async fn run(command: Command, config: Config) -> anyhow::Result<()> {
    let client = data_fetcher::client(&config)?;
    let mut session = Session::default();

    match command {
        Command::Search { query } => {
            let found = suggestions(&client, &query).await?;
            if found.is_empty() {
                println!("No suggestions for '{}'", query.trim());
            } else {
                suggestions_table(&found).printstd();
            }
        }

        Command::History { coin, days } => {
            let days = days.unwrap_or(config.history_days);
            load_history(&mut session, &client, &config, &coin, days).await?;

            println!("Actual Price (Last {days} Days)");
            series_table(session.history(), &config.vs_currency).printstd();
        }

        Command::Predict {
            coin,
            days,
            seed,
            json,
        } => {
            let days = days.unwrap_or(config.history_days);
            load_history(&mut session, &client, &config, &coin, days).await?;

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let today = Local::now().date_naive();

            let report = match session.predict(today, &mut rng) {
                Ok(report) => report.clone(),
                Err(ForecastError::NoBaseline) => {
                    bail!("No price history available for '{coin}'. Please select a coin first.")
                }
                Err(e) => return Err(e.into()),
            };

            if json {
                let output = PredictionOutput {
                    coin: &coin,
                    history: session.history(),
                    forecast: session.forecast(),
                    report: &report,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("Actual Price (Last {days} Days)");
                series_table(session.history(), &config.vs_currency).printstd();

                println!("\nPredicted Price (Next {} Days)", report.days);
                series_table(session.forecast(), &config.vs_currency).printstd();

                println!("\n{report}");
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(api_url = %config.api_url, vs_currency = %config.vs_currency, "Configuration loaded");

    let rt = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;

    rt.block_on(run(args.command, config))
}
