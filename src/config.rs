use crate::analytics::SeriesPolicy;
use std::env;
use tracing::warn;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub series_policy: SeriesPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            series_policy: SeriesPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                warn!("ignoring invalid PORT {value:?}");
                defaults.port
            }),
            None => defaults.port,
        };

        let backend_url = lookup("LINKS_BACKEND_URL")
            .filter(|value| !value.trim().is_empty())
            .map(|value| normalize_base_url(value.trim()))
            .unwrap_or(defaults.backend_url);

        let series_policy = match lookup("LINKS_SERIES_FENCE").as_deref() {
            None | Some("on") => SeriesPolicy::Fenced,
            Some("off") => SeriesPolicy::Unfenced,
            Some(other) => {
                warn!("ignoring invalid LINKS_SERIES_FENCE {other:?}");
                defaults.series_policy
            }
        };

        Self {
            port,
            backend_url,
            series_policy,
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}
