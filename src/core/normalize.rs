use crate::domain::model::Coordinates;
use crate::utils::error::{Result, YieldError};

/// Clamps raw latitude/longitude into range. A value that does not parse to a
/// finite float fails here, before any request is issued.
pub fn normalize_coordinates(raw_lat: &str, raw_lon: &str) -> Result<Coordinates> {
    let lat = normalize_axis("latitude", raw_lat, -90.0, 90.0)?;
    let lon = normalize_axis("longitude", raw_lon, -180.0, 180.0)?;
    Ok(Coordinates { lat, lon })
}

fn normalize_axis(field: &str, raw: &str, min: f64, max: f64) -> Result<f64> {
    let parsed: f64 = raw
        .trim()
        .parse()
        .map_err(|_| YieldError::InvalidInput {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "not a number".to_string(),
        })?;

    if !parsed.is_finite() {
        return Err(YieldError::InvalidInput {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "not a finite number".to_string(),
        });
    }

    Ok(parsed.clamp(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_coordinates_pass_through() {
        let coords = normalize_coordinates("14.6108", "-61.0689").unwrap();
        assert_eq!(coords.lat, 14.6108);
        assert_eq!(coords.lon, -61.0689);
    }

    #[test]
    fn test_latitude_clamps_to_90() {
        let coords = normalize_coordinates("95", "0").unwrap();
        assert_eq!(coords.lat, 90.0);
    }

    #[test]
    fn test_longitude_clamps_to_minus_180() {
        let coords = normalize_coordinates("0", "-200").unwrap();
        assert_eq!(coords.lon, -180.0);
    }

    #[test]
    fn test_non_numeric_latitude_is_invalid_input() {
        let err = normalize_coordinates("abc", "0").unwrap_err();
        assert!(matches!(err, YieldError::InvalidInput { ref field, .. } if field == "latitude"));
    }

    #[test]
    fn test_non_finite_longitude_is_invalid_input() {
        assert!(normalize_coordinates("0", "NaN").is_err());
        assert!(normalize_coordinates("0", "inf").is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let coords = normalize_coordinates(" 45.0 ", "\t2.5\n").unwrap();
        assert_eq!(coords.lat, 45.0);
        assert_eq!(coords.lon, 2.5);
    }
}
