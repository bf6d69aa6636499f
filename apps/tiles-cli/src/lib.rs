//! Reduplicated word tiles
//!
//! Library side of the `tiles` binary: configuration loading and the
//! generate / harvest / define jobs.

pub mod commands;
pub mod config;
pub mod logging;

pub use commands::{define, generate, harvest, FormatArg, GenerateOptions, StrategyArg};
pub use config::{Config, GenerateConfig, LayoutPreset};
pub use logging::log_filter;
