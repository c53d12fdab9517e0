//! # ONDO Common Library
//!
//! Shared code for the ONDO services including:
//! - Error taxonomy
//! - Configuration loading
//! - Feedback wire types
//! - Feedback file read/write helpers

pub mod config;
pub mod error;
pub mod feedback_file;
pub mod types;

pub use error::{Error, Result};
pub use types::{FeedbackEntry, FeedbackRating};
