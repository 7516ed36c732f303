pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::PvgisClient;
pub use core::estimator::Estimator;
pub use domain::model::{Coordinates, YieldEstimate, PANEL_TILT_DEGREES};
pub use domain::ports::TextFetcher;
pub use utils::error::{Result, YieldError};
