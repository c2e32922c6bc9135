use itertools::Itertools;
use seyeon_shared_models::{PricePoint, RawSample};
use tracing::warn;

use crate::round2;

/// Collapses raw samples into one price per UTC calendar day.
///
/// The first sample seen for a day wins; later samples for the same day are
/// dropped. Days come out in the order they were first encountered, which is
/// chronological as long as the input is sorted by timestamp.
pub fn normalize<I>(samples: I) -> Vec<PricePoint>
where
    I: IntoIterator<Item = RawSample>,
{
    samples
        .into_iter()
        .filter_map(|sample| match sample.utc_date() {
            Some(date) => Some(PricePoint {
                date,
                price: round2(sample.price),
            }),
            None => {
                warn!(timestamp_ms = sample.timestamp_ms, "Skipping sample with unrepresentable timestamp");
                None
            }
        })
        .unique_by(|point| point.date)
        .collect()
}
