use crate::utils::error::{Result, YieldError};
use serde::{Deserialize, Serialize};

/// Panel inclination from horizontal, fixed for every estimate.
pub const PANEL_TILT_DEGREES: u32 = 28;

/// Normalized latitude/longitude pair, always in range after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One estimate per submission; a pure function result, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldEstimate {
    /// Estimated annual output in kWh per kWp installed.
    pub productible: f64,
    pub tilt_degrees: u32,
    pub azimuth_degrees: f64,
}

impl YieldEstimate {
    pub fn new(productible: f64, tilt_degrees: u32, azimuth_degrees: f64) -> Result<Self> {
        if !productible.is_finite() || productible < 0.0 {
            return Err(YieldError::ParseFailure {
                message: format!("annual yield {} is not a physical value", productible),
            });
        }

        Ok(Self {
            productible,
            tilt_degrees,
            azimuth_degrees,
        })
    }
}
