use crate::models::{AnalyticsView, LinkData, SERIES_DAYS};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

const YESTERDAY_LABEL: &str = "igår";
const TODAY_LABEL: &str = "idag";

/// How late click-series responses are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeriesPolicy {
    /// Only the response for the latest selection is published.
    #[default]
    Fenced,
    /// Every response is published in completion order.
    Unfenced,
}

/// Tag attached to an outgoing series request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesTicket {
    pub generation: u64,
    pub short: String,
}

pub fn build_view(short: &str, data: LinkData) -> AnalyticsView {
    build_view_at(Local::now().date_naive(), short, data)
}

/// Projects a most-recent-first series into chart order. The series length
/// is taken as given.
pub fn build_view_at(today: NaiveDate, short: &str, data: LinkData) -> AnalyticsView {
    let total = data.num_clicks.iter().copied().fold(0u64, u64::saturating_add);
    let mut values = data.num_clicks;
    values.reverse();

    AnalyticsView {
        short: short.to_string(),
        long_url: data.long_url,
        total,
        labels: day_labels(),
        values,
        as_of: today,
    }
}

/// `"+29"` down to `"+2"`, then yesterday and today.
pub fn day_labels() -> Vec<String> {
    let mut labels = Vec::with_capacity(SERIES_DAYS);
    for age in (2..SERIES_DAYS).rev() {
        labels.push(format!("+{age}"));
    }
    labels.push(YESTERDAY_LABEL.to_string());
    labels.push(TODAY_LABEL.to_string());
    labels
}
