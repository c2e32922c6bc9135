pub mod market_chart;
pub mod method;
pub mod search;

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, InvalidHeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

const API_KEY_HEADER: &str = "x-cg-demo-api-key";

#[derive(Error, Debug)]
pub enum ClientBuildError {
    #[error("Invalid API key header value: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),
    #[error("Failed to build reqwest client: {0}")]
    Reqwest(#[from] reqwest::Error),
}

pub struct CoingeckoClient {
    base_url: String,
    reqwest: Client,
}

impl CoingeckoClient {
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ClientBuildError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(api_key) = api_key {
            headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);
        }

        let reqwest = ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            reqwest,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> reqwest::Result<T> {
        debug!(%url, "GET");

        let response = self
            .reqwest
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(response)
    }

    pub async fn call<M: method::Method>(&self, params: M::Params) -> reqwest::Result<M::Response> {
        let url = format!("{}{}", self.base_url, M::path(&params));
        self.get(&url, &params).await
    }
}
