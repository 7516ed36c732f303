use crate::core::normalize::normalize_coordinates;
use crate::core::parser::parse_annual_yield;
use crate::core::request::{pvcalc_url, DEFAULT_API_BASE};
use crate::domain::model::{YieldEstimate, PANEL_TILT_DEGREES};
use crate::domain::ports::TextFetcher;
use crate::utils::error::Result;

/// Composes the full round trip: normalize the raw coordinates, build the
/// PVcalc query, fetch the text body through the injected port, parse the
/// annual yield out of it.
pub struct Estimator<F: TextFetcher> {
    fetcher: F,
    api_base: String,
}

impl<F: TextFetcher> Estimator<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub async fn compute_estimate(
        &self,
        raw_lat: &str,
        raw_lon: &str,
        azimuth_degrees: f64,
    ) -> Result<YieldEstimate> {
        let coords = normalize_coordinates(raw_lat, raw_lon)?;

        let url = pvcalc_url(&self.api_base, &coords, azimuth_degrees)?;
        tracing::debug!("Requesting PVGIS estimate: {}", url);

        let body = self.fetcher.fetch_text(url.as_str()).await?;
        tracing::debug!("PVGIS response body: {} bytes", body.len());

        let productible = parse_annual_yield(&body)?;
        YieldEstimate::new(productible, PANEL_TILT_DEGREES, azimuth_degrees)
    }
}
