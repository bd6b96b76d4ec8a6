//! Text emotion detection service.
//!
//! Classifies short typed or transcribed text into one of five emotions,
//! attaches a heuristic confidence and serves a curated suggestion for the
//! detected emotion over HTTP.

pub mod config;
pub mod content;
pub mod emotion;
pub mod server;

pub use config::Config;
pub use emotion::{classify, Category, ClassificationResult};
