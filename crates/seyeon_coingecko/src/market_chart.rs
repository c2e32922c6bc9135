use bon::Builder;
use serde::{Deserialize, Serialize};
use seyeon_shared_models::RawSample;
use crate::method::Method;

#[derive(Serialize, Deserialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct MarketChartParams {
    /// CoinGecko coin id, e.g. `bitcoin`. Goes into the path, not the query.
    #[serde(skip)]
    pub id: String,

    #[builder(default = String::from("usd"))]
    pub vs_currency: String,

    #[builder(default = 15)]
    pub days: u32,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MarketChartResponse {
    pub prices: Vec<RawSample>,
    #[serde(default)]
    pub market_caps: Vec<RawSample>,
    #[serde(default)]
    pub total_volumes: Vec<RawSample>,
}

pub struct MarketChart;

impl Method for MarketChart {
    type Response = MarketChartResponse;
    type Params = MarketChartParams;

    fn path(params: &Self::Params) -> String {
        format!("/coins/{}/market_chart", params.id)
    }
}
