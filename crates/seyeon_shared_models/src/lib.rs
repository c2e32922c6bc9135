use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single `[timestampMs, price]` pair as returned by the market chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct RawSample {
    pub timestamp_ms: i64,
    pub price: f64,
}

impl RawSample {
    pub fn new(timestamp_ms: i64, price: f64) -> Self {
        Self {
            timestamp_ms,
            price,
        }
    }

    /// UTC calendar date of the sample, `None` when the timestamp is out of range.
    pub fn utc_date(&self) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp_ms).map(|dt| dt.date_naive())
    }
}

impl From<(f64, f64)> for RawSample {
    fn from((timestamp_ms, price): (f64, f64)) -> Self {
        Self {
            timestamp_ms: timestamp_ms as i64,
            price,
        }
    }
}

impl From<RawSample> for (f64, f64) {
    fn from(sample: RawSample) -> Self {
        (sample.timestamp_ms as f64, sample.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Upward,
    Downward,
}

impl Trend {
    /// Equal endpoints count as `Downward`.
    pub fn between(first: f64, last: f64) -> Self {
        if last > first {
            Trend::Upward
        } else {
            Trend::Downward
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Upward => write!(f, "Upward"),
            Trend::Downward => write!(f, "Downward"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_sample_from_api_pair() {
        let samples: Vec<RawSample> =
            serde_json::from_str("[[1704067200000, 42000.5], [1704070800000.0, 42100.25]]")
                .expect("Failed to decode samples");

        assert_eq!(samples[0], RawSample::new(1_704_067_200_000, 42000.5));
        assert_eq!(samples[1].timestamp_ms, 1_704_070_800_000);
        assert_eq!(
            samples[0].utc_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn late_utc_evening_stays_on_same_date() {
        // 2024-01-01T23:59:59.999Z
        let sample = RawSample::new(1_704_153_599_999, 1.0);
        assert_eq!(sample.utc_date(), NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn out_of_range_timestamp_has_no_date() {
        assert_eq!(RawSample::new(i64::MAX, 1.0).utc_date(), None);
    }

    #[test]
    fn equal_endpoints_trend_downward() {
        assert_eq!(Trend::between(100.0, 100.01), Trend::Upward);
        assert_eq!(Trend::between(100.0, 100.0), Trend::Downward);
        assert_eq!(Trend::between(100.0, 99.0), Trend::Downward);
    }

    #[test]
    fn price_point_date_serializes_as_iso_day() {
        let point = PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            price: 102.0,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-03","price":102.0}"#);
    }
}
