//! capgrid-core: shared types, errors, and configuration for capgrid.

pub mod config;
pub mod error;
pub mod types;

pub use config::CapgridConfig;
pub use error::{AnalyticsError, AnalyticsResult};
pub use types::*;
