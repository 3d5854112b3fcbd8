pub mod analytics;
pub mod app;
pub mod backend;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod shorten;
pub mod state;
pub mod ui;

pub use app::router;
pub use backend::{Backend, HttpBackend};
pub use config::Config;
pub use dashboard::Dashboard;
pub use state::AppState;
