//! View-model driving the link dashboard.
//!
//! Each user action runs its backend round-trips without holding the state
//! lock, then folds the outcome into [`ViewState`] through [`reduce`]. Any
//! action that changes the link set or the selection triggers a series
//! refresh for the selected link.

use crate::analytics::{SeriesPolicy, build_view};
use crate::backend::Backend;
use crate::errors::UserError;
use crate::models::{CreationRecord, Credentials, DashboardView};
use crate::shorten::canonicalize_long_url;
use crate::state::{Action, ViewState, reduce};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub struct Dashboard {
    backend: Arc<dyn Backend>,
    base_url: String,
    policy: SeriesPolicy,
    state: Mutex<ViewState>,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn Backend>, base_url: impl Into<String>, policy: SeriesPolicy) -> Self {
        Self {
            backend,
            base_url: base_url.into(),
            policy,
            state: Mutex::new(ViewState::default()),
        }
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    pub async fn view(&self) -> DashboardView {
        self.state.lock().await.render(&self.base_url)
    }

    /// Applies `action` and reports whether the link set or selection moved.
    async fn apply(&self, action: Action) -> bool {
        let mut state = self.state.lock().await;
        let next = reduce(&state, action);
        let moved = next.generation != state.generation;
        *state = next;
        moved
    }

    async fn apply_and_refresh(&self, action: Action) {
        if self.apply(action).await {
            self.refresh().await;
        }
    }

    pub async fn load_session(&self) {
        match self.backend.session_username().await {
            Ok(username) if !username.is_empty() => {
                info!("resumed session for {username}");
                self.apply(Action::SessionLoaded(Some(username))).await;
                self.initialize_links().await;
            }
            Ok(_) => {
                debug!("backend returned an empty session owner");
                self.apply(Action::SessionLoaded(None)).await;
            }
            Err(err) => {
                debug!("no active session: {err}");
                self.apply(Action::SessionLoaded(None)).await;
            }
        }
    }

    pub async fn login(&self, credentials: Credentials) {
        if !credentials.is_complete() {
            debug!("login not sent: username or password missing");
            return;
        }

        match self.backend.login(&credentials).await {
            Ok(()) => {
                info!("logged in as {}", credentials.username);
                self.apply(Action::LoggedIn(credentials.username)).await;
                self.initialize_links().await;
            }
            Err(err) => {
                warn!("login rejected: {err}");
                self.apply(Action::Failed(UserError::auth(err))).await;
            }
        }
    }

    pub async fn register(&self, credentials: Credentials) {
        match self.backend.register(&credentials).await {
            Ok(()) => {
                info!("registered {}", credentials.username);
                self.apply(Action::Registered).await;
            }
            Err(err) => {
                warn!("registration rejected: {err}");
                self.apply(Action::Failed(UserError::auth(err))).await;
            }
        }
    }

    pub async fn logout(&self) {
        self.apply(Action::LoggedOut).await;
        // The local session is already gone; the backend's answer changes nothing.
        if let Err(err) = self.backend.logout().await {
            debug!("logout notification failed: {err}");
        }
    }

    pub async fn toggle_mode(&self) {
        self.apply(Action::ModeToggled).await;
    }

    async fn initialize_links(&self) {
        let codes = match self.backend.links().await {
            Ok(codes) => codes,
            Err(err) => {
                warn!("could not load links: {err}");
                Vec::new()
            }
        };
        debug!("loaded {} links", codes.len());
        self.apply_and_refresh(Action::LinksLoaded(codes)).await;
    }

    pub async fn shorten(&self, long_url: &str) {
        self.apply(Action::ShortenStarted).await;

        match self.backend.shorten(long_url).await {
            Ok(short) => {
                let record = CreationRecord {
                    long: canonicalize_long_url(long_url),
                    short,
                };
                info!("shortened {} to {}", record.long, record.short);
                self.apply_and_refresh(Action::Shortened(record)).await;
            }
            Err(err) => {
                warn!("shorten failed: {err}");
                self.apply(Action::Failed(UserError::shorten(err))).await;
            }
        }
    }

    pub async fn select(&self, index: usize) {
        self.apply_and_refresh(Action::Selected(index)).await;
    }

    /// Removes the selected link locally and on the backend.
    pub async fn remove_selected(&self) {
        let (short, moved) = {
            let mut state = self.state.lock().await;
            let Some(short) = state.registry.selected().map(str::to_string) else {
                return;
            };
            let next = reduce(&state, Action::Removed(short.clone()));
            let moved = next.generation != state.generation;
            *state = next;
            (short, moved)
        };
        info!("removing {short}");

        let refresh = async {
            if moved {
                self.refresh().await;
            }
        };
        let (removal, ()) = tokio::join!(self.backend.remove_link(&short), refresh);
        // Local state already dropped the link whatever the backend says.
        if let Err(err) = removal {
            debug!("remove request for {short} failed: {err}");
        }
    }

    /// Fetches and publishes the series for the selected link.
    pub async fn refresh(&self) {
        let Some(ticket) = self.state.lock().await.series_ticket() else {
            return;
        };

        let data = match self.backend.link_data(&ticket.short).await {
            Ok(data) => data,
            Err(err) => {
                warn!("could not load series for {}: {err}", ticket.short);
                return;
            }
        };

        let view = build_view(&ticket.short, data);
        let mut state = self.state.lock().await;
        if !state.accepts_series(&ticket, self.policy) {
            debug!("discarding stale series for {}", ticket.short);
        }
        *state = reduce(
            &state,
            Action::SeriesLoaded {
                ticket,
                view,
                policy: self.policy,
            },
        );
    }
}
