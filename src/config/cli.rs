use crate::core::request::DEFAULT_API_BASE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pv-yield")]
#[command(about = "Estimates annual photovoltaic yield for a location via PVGIS")]
pub struct CliConfig {
    /// Latitude in decimal degrees, clamped to [-90, 90]
    #[arg(long)]
    pub lat: String,

    /// Longitude in decimal degrees, clamped to [-180, 180]
    #[arg(long)]
    pub lon: String,

    /// Panel azimuth in degrees (0 = south, 90 = west)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub orientation: f64,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("lat", &self.lat)?;
        validate_non_empty_string("lon", &self.lon)?;
        validate_url("api_base", &self.api_base)?;
        Ok(())
    }
}
