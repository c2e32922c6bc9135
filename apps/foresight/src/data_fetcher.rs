use anyhow::{Context, Result};
use seyeon_coingecko::market_chart::{MarketChart, MarketChartParams};
use seyeon_coingecko::search::{is_searchable, Search, SearchParams, Suggestion};
use seyeon_coingecko::CoingeckoClient;
use seyeon_shared_models::RawSample;
use tracing::{info, warn};

use crate::config::Config;

pub fn client(config: &Config) -> Result<CoingeckoClient> {
    CoingeckoClient::new(&config.api_url, config.api_key.as_deref(), config.timeout)
        .context("Failed to build CoinGecko client")
}

/// Up to five coins matching `query`. Too-short queries never reach the API.
pub async fn suggestions(client: &CoingeckoClient, query: &str) -> Result<Vec<Suggestion>> {
    let query = query.trim();
    if !is_searchable(query) {
        info!(query, "Query too short, skipping search");
        return Ok(Vec::new());
    }

    let response = client
        .call::<Search>(SearchParams::builder().query(query).build())
        .await
        .with_context(|| format!("Failed to search coins for '{query}'"))?;

    Ok(response.suggestions())
}

pub async fn fetch_historical_data(
    client: &CoingeckoClient,
    coin_id: &str,
    vs_currency: &str,
    days: u32,
) -> Result<Vec<RawSample>> {
    info!(coin_id, vs_currency, days, "Fetching market chart");

    let params = MarketChartParams::builder()
        .id(coin_id)
        .vs_currency(vs_currency)
        .days(days)
        .build();

    let response = client
        .call::<MarketChart>(params)
        .await
        .with_context(|| format!("Failed to fetch price history for '{coin_id}'"))?;

    let prices = response.prices;
    if !prices.windows(2).all(|w| w[0].timestamp_ms <= w[1].timestamp_ms) {
        warn!(coin_id, "Price samples are not sorted by timestamp; daily order follows first occurrence");
    }

    Ok(prices)
}
