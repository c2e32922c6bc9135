use bon::Builder;
use serde::{Deserialize, Serialize};
use crate::method::Method;

#[derive(Serialize, Deserialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct SearchParams {
    pub query: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<SearchCoin>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub api_symbol: Option<String>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Queries shorter than this (after trimming) are not sent.
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
}

impl From<&SearchCoin> for Suggestion {
    fn from(coin: &SearchCoin) -> Self {
        Self {
            id: coin.id.clone(),
            label: format!("{} ({})", coin.name, coin.symbol.to_uppercase()),
        }
    }
}

pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

impl SearchResponse {
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.coins
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(Suggestion::from)
            .collect()
    }
}

pub struct Search;

impl Method for Search {
    type Response = SearchResponse;
    type Params = SearchParams;

    fn path(_params: &Self::Params) -> String {
        "/search".to_string()
    }
}
