pub mod app;
pub mod chart;
pub mod config;
pub mod controls;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod presets;
pub mod summary;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use dashboard::Dashboard;
pub use state::AppState;
