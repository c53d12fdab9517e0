//! HTTP API handlers for ondo-ml

pub mod health;
pub mod predict;

pub use health::health_routes;
pub use predict::predict_offset;
