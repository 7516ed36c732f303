use crate::domain::model::{Coordinates, PANEL_TILT_DEGREES};
use crate::utils::error::Result;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://re.jrc.ec.europa.eu/api/v5_2/PVcalc";

/// Builds the PVcalc query for one estimate: 1 kWp of crystalline silicon at
/// the fixed tilt, 10% system loss, SARAH2 radiation database, horizon on.
pub fn pvcalc_url(api_base: &str, coords: &Coordinates, azimuth_degrees: f64) -> Result<Url> {
    let url = Url::parse_with_params(
        api_base,
        &[
            ("outputformat", "basic".to_string()),
            ("lat", coords.lat.to_string()),
            ("lon", coords.lon.to_string()),
            ("raddatabase", "PVGIS-SARAH2".to_string()),
            ("peakpower", "1".to_string()),
            ("loss", "10".to_string()),
            ("pvtechchoice", "crystSi".to_string()),
            ("angle", PANEL_TILT_DEGREES.to_string()),
            ("aspect", azimuth_degrees.to_string()),
            ("usehorizon", "1".to_string()),
        ],
    )?;

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pvcalc_url_carries_coordinates_and_orientation() {
        let coords = Coordinates {
            lat: 14.6108,
            lon: -61.0689,
        };
        let url = pvcalc_url(DEFAULT_API_BASE, &coords, 30.0).unwrap();

        assert_eq!(url.host_str(), Some("re.jrc.ec.europa.eu"));
        assert_eq!(url.path(), "/api/v5_2/PVcalc");

        let query = url.query().unwrap();
        assert!(query.contains("lat=14.6108"));
        assert!(query.contains("lon=-61.0689"));
        assert!(query.contains("angle=28"));
        assert!(query.contains("aspect=30"));
        assert!(query.contains("outputformat=basic"));
    }

    #[test]
    fn test_pvcalc_url_rejects_bad_base() {
        let coords = Coordinates { lat: 0.0, lon: 0.0 };
        assert!(pvcalc_url("not a url", &coords, 0.0).is_err());
    }
}
