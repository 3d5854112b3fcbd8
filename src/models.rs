use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of days covered by a click series.
pub const SERIES_DAYS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    pub username: Option<String>,
}

impl Session {
    pub fn logged_in(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

impl FormMode {
    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationRecord {
    pub short: String,
    pub long: String,
}

/// Click series as the backend returns it, most recent day first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkData {
    #[serde(rename = "LongURL")]
    pub long_url: String,
    #[serde(rename = "NumClicks")]
    pub num_clicks: Vec<u64>,
}

/// Chart-ready projection of a click series, oldest day first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsView {
    pub short: String,
    pub long_url: String,
    pub total: u64,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub as_of: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub short: String,
    pub short_url: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestLink {
    pub short: String,
    pub short_url: String,
    pub long: String,
}

/// What the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub username: Option<String>,
    pub mode: FormMode,
    pub error: Option<String>,
    pub latest: Option<LatestLink>,
    pub history: Vec<CreationRecord>,
    pub links: Vec<LinkEntry>,
    pub selection: Option<usize>,
    pub analytics: Option<AnalyticsView>,
}
