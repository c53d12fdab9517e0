//! External service clients

pub mod kma;
pub mod offset;

pub use kma::{KmaClient, WeatherReading};
pub use offset::{OffsetClient, OffsetOutcome};
