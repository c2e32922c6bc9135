use chrono::{Days, NaiveDate};
use rand::Rng;
use seyeon_shared_models::PricePoint;
use thiserror::Error;

use crate::round2;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ForecastError {
    #[error("No baseline price available, select a coin first")]
    NoBaseline,
    #[error("Forecast series is empty")]
    EmptyForecast,
}

#[derive(Debug, Clone)]
pub struct Params {
    pub daily_growth_rate: f64, // linear growth per day relative to the baseline
    pub volatility: f64,        // jitter spans +/- half of this, relative to the baseline
    pub horizon: u32,           // number of days projected
}

impl Default for Params {
    fn default() -> Self {
        Self {
            daily_growth_rate: 0.005,
            volatility: 0.02,
            horizon: 30,
        }
    }
}

impl Params {
    /// Deterministic part of the projection for `day` (1-indexed).
    pub fn trend_at(&self, baseline: f64, day: u32) -> f64 {
        baseline * (1.0 + self.daily_growth_rate * f64::from(day))
    }

    /// Largest absolute jitter that can be added to any day.
    pub fn jitter_bound(&self, baseline: f64) -> f64 {
        0.5 * self.volatility * baseline
    }
}

/// Projects `params.horizon` days past `today`, anchored on the last price of
/// `history`.
pub fn generate<R: Rng + ?Sized>(
    history: &[PricePoint],
    today: NaiveDate,
    params: &Params,
    rng: &mut R,
) -> Result<Vec<PricePoint>, ForecastError> {
    let baseline = history.last().ok_or(ForecastError::NoBaseline)?.price;

    let forecast = (1..=params.horizon)
        .map(|day| {
            let fluctuation = (rng.gen::<f64>() - 0.5) * params.volatility * baseline;

            PricePoint {
                date: today + Days::new(u64::from(day)),
                price: round2(params.trend_at(baseline, day) + fluctuation),
            }
        })
        .collect();

    Ok(forecast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn history(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                date: NaiveDate::from_ymd_opt(2024, 1, i as u32 + 1).unwrap(),
                price,
            })
            .collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 27).unwrap()
    }

    #[test]
    fn refuses_empty_history() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            generate(&[], today(), &Params::default(), &mut rng),
            Err(ForecastError::NoBaseline)
        );
    }

    #[test]
    fn always_thirty_consecutive_days() {
        let mut rng = StdRng::seed_from_u64(42);
        let forecast = generate(&history(&[100.0]), today(), &Params::default(), &mut rng).unwrap();

        assert_eq!(forecast.len(), 30);
        // Crosses the leap day.
        assert_eq!(forecast[0].date, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(forecast[1].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(forecast[29].date, NaiveDate::from_ymd_opt(2024, 3, 28).unwrap());
        assert!(forecast
            .windows(2)
            .all(|w| w[0].date.succ_opt() == Some(w[1].date)));
    }

    #[test]
    fn every_day_stays_inside_trend_envelope() {
        let params = Params::default();
        let baseline = 102.0;

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let forecast = generate(&history(&[100.0, 100.0, baseline]), today(), &params, &mut rng).unwrap();

            for (i, point) in forecast.iter().enumerate() {
                let trend = params.trend_at(baseline, i as u32 + 1);
                let slack = params.jitter_bound(baseline) + 0.01;
                assert!(
                    (point.price - trend).abs() <= slack,
                    "seed {seed} day {}: {} outside {trend} +/- {slack}",
                    i + 1,
                    point.price
                );
            }
        }
    }

    #[test]
    fn trend_matches_worked_example() {
        let params = Params::default();
        assert!((params.trend_at(102.0, 1) - 102.51).abs() < 1e-9);
        assert!((params.trend_at(102.0, 30) - 117.30).abs() < 1e-9);
        assert!((params.jitter_bound(102.0) - 1.02).abs() < 1e-9);
    }

    #[test]
    fn zero_volatility_is_pure_trend() {
        let params = Params {
            volatility: 0.0,
            ..Params::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let forecast = generate(&history(&[102.0]), today(), &params, &mut rng).unwrap();

        assert_eq!(forecast[0].price, 102.51);
        assert_eq!(forecast[29].price, 117.3);
    }

    #[test]
    fn same_seed_same_projection() {
        let params = Params::default();
        let a = generate(&history(&[250.0]), today(), &params, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate(&history(&[250.0]), today(), &params, &mut StdRng::seed_from_u64(9)).unwrap();
        let c = generate(&history(&[250.0]), today(), &params, &mut StdRng::seed_from_u64(10)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn baseline_is_last_entry() {
        let params = Params {
            volatility: 0.0,
            horizon: 1,
            ..Params::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let forecast = generate(&history(&[10.0, 2000.0, 200.0]), today(), &params, &mut rng).unwrap();

        assert_eq!(forecast, vec![PricePoint { date: today().succ_opt().unwrap(), price: 201.0 }]);
    }
}
