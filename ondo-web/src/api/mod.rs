//! HTTP API handlers for ondo-web

pub mod feedback;
pub mod health;
pub mod ui;
pub mod weather;

pub use feedback::post_feedback;
pub use health::health_routes;
pub use ui::{serve_app_js, serve_index};
pub use weather::get_weather;
