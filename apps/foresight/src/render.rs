use prettytable::{row, Table};
use serde::Serialize;
use seyeon_coingecko::search::Suggestion;
use seyeon_forecast::ForecastReport;
use seyeon_shared_models::PricePoint;

#[derive(Serialize, Debug)]
pub struct PredictionOutput<'a> {
    pub coin: &'a str,
    pub history: &'a [PricePoint],
    pub forecast: &'a [PricePoint],
    pub report: &'a ForecastReport,
}

pub fn series_table(points: &[PricePoint], vs_currency: &str) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Date", format!("Price ({})", vs_currency.to_uppercase())]);

    for point in points {
        table.add_row(row![point.date.format("%Y-%m-%d"), format!("{:.2}", point.price)]);
    }

    table
}

pub fn suggestions_table(suggestions: &[Suggestion]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["#", "Coin", "Id"]);

    for (i, suggestion) in suggestions.iter().enumerate() {
        table.add_row(row![i + 1, suggestion.label, suggestion.id]);
    }

    table
}
