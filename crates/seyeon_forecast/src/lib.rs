pub mod forecast;
pub mod report;
pub mod series;
pub mod session;

pub use forecast::{ForecastError, Params as ForecastParams};
pub use report::ForecastReport;
pub use session::{LoadTicket, Session};

/// Rounds to cents, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
