use crate::analytics::{SeriesPolicy, SeriesTicket};
use crate::dashboard::Dashboard;
use crate::errors::UserError;
use crate::models::{
    AnalyticsView, CreationRecord, DashboardView, FormMode, LatestLink, LinkEntry, Session,
};
use crate::registry::LinkRegistry;
use crate::shorten::short_url;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}

/// Snapshot of everything the dashboard shows.
///
/// `generation` increases whenever the link set or the selection changes and
/// is what series responses are fenced against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub session: Session,
    pub mode: FormMode,
    pub error: Option<UserError>,
    pub history: Vec<CreationRecord>,
    pub registry: LinkRegistry,
    pub analytics: Option<AnalyticsView>,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SessionLoaded(Option<String>),
    LoggedIn(String),
    Registered,
    LoggedOut,
    ModeToggled,
    LinksLoaded(Vec<String>),
    ShortenStarted,
    Shortened(CreationRecord),
    Failed(UserError),
    Selected(usize),
    Removed(String),
    SeriesLoaded {
        ticket: SeriesTicket,
        view: AnalyticsView,
        policy: SeriesPolicy,
    },
}

pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    let mut next = state.clone();
    match action {
        Action::SessionLoaded(Some(username)) => {
            next.session = Session::logged_in(username);
        }
        Action::SessionLoaded(None) | Action::LoggedOut => {
            next.session = Session::default();
            next.registry = LinkRegistry::default();
            next.analytics = None;
            next.generation += 1;
        }
        Action::LoggedIn(username) => {
            next.session = Session::logged_in(username);
            next.error = None;
        }
        Action::Registered => {
            next.error = None;
            next.mode = FormMode::Login;
        }
        Action::ModeToggled => {
            next.mode = next.mode.toggled();
        }
        Action::LinksLoaded(codes) => {
            // A listing that lands after logout belongs to nobody.
            if next.session.is_logged_in() {
                next.registry = LinkRegistry::from_codes(codes);
                next.generation += 1;
            }
        }
        Action::ShortenStarted => {
            next.error = None;
        }
        Action::Shortened(record) => {
            let short = record.short.clone();
            next.history.push(record);
            if next.session.is_logged_in() && next.registry.observe(short) {
                next.generation += 1;
            }
        }
        Action::Failed(err) => {
            next.error = Some(err);
        }
        Action::Selected(index) => {
            if next.registry.select(index) {
                next.generation += 1;
            }
        }
        Action::Removed(short) => {
            next.history.retain(|record| record.short != short);
            if next.registry.remove(&short) {
                next.generation += 1;
            }
        }
        Action::SeriesLoaded {
            ticket,
            view,
            policy,
        } => {
            if state.accepts_series(&ticket, policy) {
                next.analytics = Some(view);
            }
        }
    }

    if next.registry.is_empty() {
        next.analytics = None;
    }
    next
}

impl ViewState {
    /// Ticket for a series request against the current selection.
    pub fn series_ticket(&self) -> Option<SeriesTicket> {
        if !self.session.is_logged_in() {
            return None;
        }
        self.registry.selected().map(|short| SeriesTicket {
            generation: self.generation,
            short: short.to_string(),
        })
    }

    pub fn accepts_series(&self, ticket: &SeriesTicket, policy: SeriesPolicy) -> bool {
        match policy {
            SeriesPolicy::Unfenced => true,
            SeriesPolicy::Fenced => {
                ticket.generation == self.generation
                    && self.registry.selected() == Some(ticket.short.as_str())
            }
        }
    }

    pub fn render(&self, base_url: &str) -> DashboardView {
        let logged_in = self.session.is_logged_in();
        let latest = match (&self.error, self.history.last()) {
            (None, Some(record)) => Some(LatestLink {
                short: record.short.clone(),
                short_url: short_url(base_url, &record.short),
                long: record.long.clone(),
            }),
            _ => None,
        };

        let links = if logged_in {
            self.registry
                .codes()
                .iter()
                .enumerate()
                .map(|(index, short)| LinkEntry {
                    short: short.clone(),
                    short_url: short_url(base_url, short),
                    selected: self.registry.selection() == Some(index),
                })
                .collect()
        } else {
            Vec::new()
        };

        DashboardView {
            username: self.session.username.clone(),
            mode: self.mode,
            error: self.error.as_ref().map(ToString::to_string),
            latest,
            history: self.history.clone(),
            links,
            selection: self.registry.selection().filter(|_| logged_in),
            analytics: self.analytics.clone().filter(|_| logged_in),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::build_view_at;
    use crate::models::LinkData;
    use chrono::NaiveDate;

    fn logged_in_with(codes: &[&str]) -> ViewState {
        let state = reduce(&ViewState::default(), Action::LoggedIn("alice".into()));
        reduce(
            &state,
            Action::LinksLoaded(codes.iter().map(|code| code.to_string()).collect()),
        )
    }

    fn series_for(short: &str, first: u64) -> AnalyticsView {
        let mut counts = vec![0; 30];
        counts[0] = first;
        build_view_at(
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            short,
            LinkData {
                long_url: format!("http://{short}.example"),
                num_clicks: counts,
            },
        )
    }

    fn record(short: &str, long: &str) -> CreationRecord {
        CreationRecord {
            short: short.into(),
            long: long.into(),
        }
    }

    #[test]
    fn reduce_leaves_previous_snapshot_untouched() {
        let before = logged_in_with(&["a", "b"]);
        let after = reduce(&before, Action::Selected(1));
        assert_eq!(before.registry.selection(), Some(0));
        assert_eq!(after.registry.selection(), Some(1));
    }

    #[test]
    fn selecting_same_index_twice_matches_once() {
        let state = logged_in_with(&["a", "b", "c"]);
        let once = reduce(&state, Action::Selected(2));
        let twice = reduce(&once, Action::Selected(2));
        assert_eq!(once, twice);
    }

    #[test]
    fn removing_only_link_leaves_selection_inert() {
        let state = logged_in_with(&["abc"]);
        let state = reduce(&state, Action::Removed("abc".into()));
        assert!(state.registry.is_empty());
        assert_eq!(state.registry.selection(), None);
        assert_eq!(state.series_ticket(), None);

        let view = state.render("http://localhost:8080/");
        assert!(view.links.is_empty());
        assert_eq!(view.selection, None);
        assert_eq!(view.analytics, None);
    }

    #[test]
    fn removal_drops_history_and_resets_selection() {
        let state = logged_in_with(&["a"]);
        let state = reduce(&state, Action::Shortened(record("b", "http://b")));
        let state = reduce(&state, Action::Shortened(record("c", "http://c")));
        let state = reduce(&state, Action::Selected(2));

        let state = reduce(&state, Action::Removed("c".into()));
        assert_eq!(state.registry.codes(), ["a", "b"]);
        assert_eq!(state.registry.selection(), Some(0));
        assert_eq!(state.history, vec![record("b", "http://b")]);
    }

    #[test]
    fn repeated_creation_of_same_code_is_not_duplicated() {
        let state = logged_in_with(&["xyz"]);
        let generation = state.generation;
        let state = reduce(&state, Action::Shortened(record("xyz", "http://a")));
        let state = reduce(&state, Action::Shortened(record("xyz", "http://a")));
        assert_eq!(state.registry.codes(), ["xyz"]);
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.generation, generation);
    }

    #[test]
    fn creation_while_logged_out_only_feeds_history() {
        let state = reduce(&ViewState::default(), Action::Shortened(record("xyz", "http://a")));
        assert_eq!(state.history.len(), 1);
        assert!(state.registry.is_empty());
    }

    #[test]
    fn links_loaded_after_logout_are_ignored() {
        let state = reduce(&ViewState::default(), Action::LoggedIn("alice".into()));
        let state = reduce(&state, Action::LoggedOut);
        let state = reduce(&state, Action::LinksLoaded(vec!["a".into()]));
        assert!(state.registry.is_empty());
    }

    #[test]
    fn logout_clears_session_and_links_but_keeps_history() {
        let state = logged_in_with(&["a"]);
        let state = reduce(&state, Action::Shortened(record("b", "http://b")));
        let state = reduce(&state, Action::LoggedOut);
        assert!(!state.session.is_logged_in());
        assert!(state.registry.is_empty());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn failed_login_keeps_session_and_shows_text() {
        let state = reduce(&ViewState::default(), Action::Failed(UserError::Auth("nope".into())));
        assert!(!state.session.is_logged_in());
        assert_eq!(state.render("/").error.as_deref(), Some("nope"));
    }

    #[test]
    fn registering_returns_to_login_mode() {
        let state = reduce(&ViewState::default(), Action::ModeToggled);
        assert_eq!(state.mode, FormMode::Register);
        let state = reduce(&state, Action::Failed(UserError::Auth("taken".into())));
        assert_eq!(state.mode, FormMode::Register);
        let state = reduce(&state, Action::Registered);
        assert_eq!(state.mode, FormMode::Login);
        assert_eq!(state.error, None);
    }

    #[test]
    fn fenced_policy_drops_stale_series() {
        let state = logged_in_with(&["a", "b"]);
        let stale = state.series_ticket().unwrap();
        let state = reduce(&state, Action::Selected(1));
        let fresh = state.series_ticket().unwrap();

        let state = reduce(
            &state,
            Action::SeriesLoaded {
                ticket: fresh,
                view: series_for("b", 2),
                policy: SeriesPolicy::Fenced,
            },
        );
        let state = reduce(
            &state,
            Action::SeriesLoaded {
                ticket: stale,
                view: series_for("a", 1),
                policy: SeriesPolicy::Fenced,
            },
        );
        assert_eq!(state.analytics.as_ref().map(|view| view.short.as_str()), Some("b"));
    }

    #[test]
    fn unfenced_policy_publishes_last_arrival() {
        let state = logged_in_with(&["a", "b"]);
        let stale = state.series_ticket().unwrap();
        let state = reduce(&state, Action::Selected(1));
        let fresh = state.series_ticket().unwrap();

        let state = reduce(
            &state,
            Action::SeriesLoaded {
                ticket: fresh,
                view: series_for("b", 2),
                policy: SeriesPolicy::Unfenced,
            },
        );
        let state = reduce(
            &state,
            Action::SeriesLoaded {
                ticket: stale,
                view: series_for("a", 1),
                policy: SeriesPolicy::Unfenced,
            },
        );
        assert_eq!(state.registry.selected(), Some("b"));
        assert_eq!(state.analytics.as_ref().map(|view| view.short.as_str()), Some("a"));
    }

    #[test]
    fn latest_link_hidden_while_error_is_shown() {
        let state = reduce(&ViewState::default(), Action::Shortened(record("xyz", "http://a")));
        let view = state.render("http://localhost:8080/");
        let latest = view.latest.expect("latest link");
        assert_eq!(latest.short_url, "http://localhost:8080/xyz");

        let state = reduce(&state, Action::Failed(UserError::Shorten("bad".into())));
        let view = state.render("http://localhost:8080/");
        assert_eq!(view.latest, None);
        assert_eq!(view.error.as_deref(), Some("Failed to shorten URL: bad"));
    }
}
