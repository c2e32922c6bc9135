use chrono::NaiveDate;
use rand::Rng;
use seyeon_shared_models::{PricePoint, RawSample};
use tracing::{debug, info};

use crate::forecast::{self, ForecastError, Params};
use crate::report::{self, ForecastReport};
use crate::series;

/// Generation token for a history load. Only the most recently issued ticket
/// may install its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owns the actual series, the projection and its report for one user.
///
/// Every buffer is replaced wholesale; a rejected request leaves all of them
/// untouched.
#[derive(Debug, Default)]
pub struct Session {
    pub params: Params,
    generation: u64,
    history: Vec<PricePoint>,
    forecast: Vec<PricePoint>,
    report: Option<ForecastReport>,
}

impl Session {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Installs a freshly fetched history and drops any previous projection.
    /// Returns `false` and changes nothing when `ticket` has been superseded.
    pub fn apply_history<I>(&mut self, ticket: LoadTicket, samples: I) -> bool
    where
        I: IntoIterator<Item = RawSample>,
    {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.generation, "Discarding superseded history");
            return false;
        }

        self.history = series::normalize(samples);
        self.forecast = Vec::new();
        self.report = None;

        info!(days = self.history.len(), "History loaded");
        true
    }

    pub fn predict<R: Rng + ?Sized>(
        &mut self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<&ForecastReport, ForecastError> {
        let baseline = self.baseline().ok_or(ForecastError::NoBaseline)?;
        let forecast = forecast::generate(&self.history, today, &self.params, rng)?;
        let report = report::summarize(&forecast, baseline)?;

        info!(baseline, days = forecast.len(), trend = %report.trend, "Forecast generated");

        self.forecast = forecast;
        Ok(self.report.insert(report))
    }

    pub fn baseline(&self) -> Option<f64> {
        self.history.last().map(|p| p.price)
    }

    pub fn history(&self) -> &[PricePoint] {
        &self.history
    }

    pub fn forecast(&self) -> &[PricePoint] {
        &self.forecast
    }

    pub fn report(&self) -> Option<&ForecastReport> {
        self.report.as_ref()
    }
}
