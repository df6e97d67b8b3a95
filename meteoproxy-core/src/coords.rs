use thiserror::Error;

/// Rejection reasons for the `lat`/`lon` query parameters. The `Display`
/// output is the exact body text sent back to the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("Missing 'lat' or 'lon'")]
    Missing,

    #[error("Latitude must be numeric.")]
    LatitudeNotNumeric,

    #[error("Longitude must be numeric.")]
    LongitudeNotNumeric,

    #[error("Latitude must be between -90 and 90.")]
    LatitudeOutOfRange,

    #[error("Longitude must be between -180 and 180.")]
    LongitudeOutOfRange,
}

/// A validated coordinate pair.
///
/// Keeps the caller's original parameter strings next to the parsed numbers:
/// the upstream query and the response payload carry those strings, not a
/// reformatting of the floats.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    lat_raw: String,
    lon_raw: String,
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Validate the raw `lat`/`lon` parameters in the order the caller sees
    /// the errors: presence, numeric latitude, numeric longitude, latitude
    /// range, longitude range.
    pub fn from_params(lat: Option<&str>, lon: Option<&str>) -> Result<Self, CoordinateError> {
        let (lat_raw, lon_raw) = match (lat, lon) {
            (Some(lat), Some(lon)) if !lat.trim().is_empty() && !lon.trim().is_empty() => {
                (lat, lon)
            }
            _ => return Err(CoordinateError::Missing),
        };

        // `f64` parsing is locale-invariant: period decimal separator, no
        // grouping. Surrounding whitespace is tolerated, the raw strings are
        // kept as received.
        let latitude: f64 =
            lat_raw.trim().parse().map_err(|_| CoordinateError::LatitudeNotNumeric)?;
        let longitude: f64 =
            lon_raw.trim().parse().map_err(|_| CoordinateError::LongitudeNotNumeric)?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange);
        }

        Ok(Self {
            lat_raw: lat_raw.to_string(),
            lon_raw: lon_raw.to_string(),
            latitude,
            longitude,
        })
    }

    pub fn lat_raw(&self) -> &str {
        &self.lat_raw
    }

    pub fn lon_raw(&self) -> &str {
        &self.lon_raw
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_pair_and_keeps_raw_strings() {
        let coords = Coordinates::from_params(Some("40.7128"), Some("-74.0060"))
            .expect("valid coordinates");

        assert_eq!(coords.lat_raw(), "40.7128");
        assert_eq!(coords.lon_raw(), "-74.0060");
        assert!((coords.latitude() - 40.7128).abs() < f64::EPSILON);
        assert!((coords.longitude() + 74.0060).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_either_parameter() {
        assert_eq!(
            Coordinates::from_params(None, Some("-74.0060")),
            Err(CoordinateError::Missing)
        );
        assert_eq!(
            Coordinates::from_params(Some("40.7128"), None),
            Err(CoordinateError::Missing)
        );
        assert_eq!(Coordinates::from_params(None, None), Err(CoordinateError::Missing));
    }

    #[test]
    fn blank_parameters_count_as_missing() {
        assert_eq!(
            Coordinates::from_params(Some(""), Some("-74.0060")),
            Err(CoordinateError::Missing)
        );
        assert_eq!(
            Coordinates::from_params(Some("40.7128"), Some("   ")),
            Err(CoordinateError::Missing)
        );
    }

    #[test]
    fn non_numeric_latitude_reported_before_longitude() {
        assert_eq!(
            Coordinates::from_params(Some("abc"), Some("-74.0060")),
            Err(CoordinateError::LatitudeNotNumeric)
        );
        // Both invalid: latitude wins.
        assert_eq!(
            Coordinates::from_params(Some("abc"), Some("xyz")),
            Err(CoordinateError::LatitudeNotNumeric)
        );
    }

    #[test]
    fn non_numeric_longitude() {
        assert_eq!(
            Coordinates::from_params(Some("40.7128"), Some("east")),
            Err(CoordinateError::LongitudeNotNumeric)
        );
    }

    #[test]
    fn latitude_range_boundaries() {
        assert!(Coordinates::from_params(Some("90"), Some("0")).is_ok());
        assert!(Coordinates::from_params(Some("-90"), Some("0")).is_ok());
        assert_eq!(
            Coordinates::from_params(Some("91"), Some("0")),
            Err(CoordinateError::LatitudeOutOfRange)
        );
        assert_eq!(
            Coordinates::from_params(Some("-91"), Some("0")),
            Err(CoordinateError::LatitudeOutOfRange)
        );
    }

    #[test]
    fn longitude_range_boundaries() {
        assert!(Coordinates::from_params(Some("0"), Some("180")).is_ok());
        assert!(Coordinates::from_params(Some("0"), Some("-180")).is_ok());
        assert_eq!(
            Coordinates::from_params(Some("0"), Some("181")),
            Err(CoordinateError::LongitudeOutOfRange)
        );
        assert_eq!(
            Coordinates::from_params(Some("0"), Some("-181")),
            Err(CoordinateError::LongitudeOutOfRange)
        );
    }

    #[test]
    fn non_finite_values_fall_out_of_range() {
        // "nan" and "inf" parse as floats but can never satisfy the range
        // checks, so they surface as out-of-range rather than non-numeric.
        assert_eq!(
            Coordinates::from_params(Some("nan"), Some("0")),
            Err(CoordinateError::LatitudeOutOfRange)
        );
        assert_eq!(
            Coordinates::from_params(Some("0"), Some("inf")),
            Err(CoordinateError::LongitudeOutOfRange)
        );
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let coords =
            Coordinates::from_params(Some(" 40.7128 "), Some("-74.0060")).expect("valid");
        assert_eq!(coords.lat_raw(), " 40.7128 ");
        assert!((coords.latitude() - 40.7128).abs() < f64::EPSILON);
    }

    #[test]
    fn error_messages_are_verbatim() {
        assert_eq!(CoordinateError::Missing.to_string(), "Missing 'lat' or 'lon'");
        assert_eq!(
            CoordinateError::LatitudeNotNumeric.to_string(),
            "Latitude must be numeric."
        );
        assert_eq!(
            CoordinateError::LongitudeNotNumeric.to_string(),
            "Longitude must be numeric."
        );
        assert_eq!(
            CoordinateError::LatitudeOutOfRange.to_string(),
            "Latitude must be between -90 and 90."
        );
        assert_eq!(
            CoordinateError::LongitudeOutOfRange.to_string(),
            "Longitude must be between -180 and 180."
        );
    }
}
