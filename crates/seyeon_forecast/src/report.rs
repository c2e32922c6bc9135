use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use seyeon_shared_models::{PricePoint, Trend};

use crate::forecast::ForecastError;
use crate::round2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Last actual price the projection was anchored on.
    pub baseline: f64,
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub first: f64,
    pub last: f64,
    pub trend: Trend,
    pub days: usize,
}

pub fn summarize(forecast: &[PricePoint], baseline: f64) -> Result<ForecastReport, ForecastError> {
    let (first, last) = match (forecast.first(), forecast.last()) {
        (Some(first), Some(last)) => (first.price, last.price),
        _ => return Err(ForecastError::EmptyForecast),
    };

    let (minimum, maximum) = forecast
        .iter()
        .map(|p| p.price)
        .minmax_by(f64::total_cmp)
        .into_option()
        .ok_or(ForecastError::EmptyForecast)?;

    let average = forecast.iter().map(|p| p.price).sum::<f64>() / forecast.len() as f64;

    Ok(ForecastReport {
        baseline,
        average: round2(average),
        minimum: round2(minimum),
        maximum: round2(maximum),
        first,
        last,
        trend: Trend::between(first, last),
        days: forecast.len(),
    })
}

impl fmt::Display for ForecastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prediction Summary")?;
        writeln!(f, "Starting price (current date): ${:.2}", self.baseline)?;
        writeln!(f, "Average predicted price: ${:.2}", self.average)?;
        writeln!(f, "Minimum predicted price: ${:.2}", self.minimum)?;
        writeln!(f, "Maximum predicted price: ${:.2}", self.maximum)?;
        writeln!(f, "Ending predicted price (after {} days): ${:.2}", self.days, self.last)?;
        writeln!(f, "Trend: {}", self.trend)?;
        write!(f, "Note: This is a simple simulated prediction and not financial advice.")
    }
}
