// Origin of the Swiss LV03 grid (Bern), in metres.
const LV03_ORIGIN: [f64; 2] = [600000.0, 200000.0];

/// A position in the Swiss LV03 grid: easting/northing in metres plus altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
    pub altitude: f64,
}

/// A WGS84 position in degrees, altitude in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl ProjectedPoint {
    pub fn new(easting: f64, northing: f64, altitude: f64) -> Self {
        Self {
            easting,
            northing,
            altitude,
        }
    }

    /// Reads a GeoJSON position `[easting, northing, altitude, ..]`.
    /// Positions without an altitude are rejected.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [easting, northing, altitude, ..] => Some(Self::new(*easting, *northing, *altitude)),
            _ => None,
        }
    }
}

/// Approximate LV03 -> WGS84 conversion (swisstopo closed-form polynomial).
/// Altitude is copied through untouched.
pub fn lv03_to_wgs84(p: ProjectedPoint) -> GeoPoint {
    let y_aux = (p.easting - LV03_ORIGIN[0]) / 1_000_000.0;
    let x_aux = (p.northing - LV03_ORIGIN[1]) / 1_000_000.0;

    let longitude = (2.6779094 + 4.728982 * y_aux + 0.791484 * y_aux * x_aux
        + 0.1306 * y_aux * x_aux.powi(2)
        - 0.0436 * y_aux.powi(3))
        * 100.0
        / 36.0;

    let latitude = (16.9023892 + 3.238272 * x_aux
        - 0.270978 * y_aux.powi(2)
        - 0.002528 * x_aux.powi(2)
        - 0.0447 * y_aux.powi(2) * x_aux
        - 0.0140 * x_aux.powi(3))
        * 100.0
        / 36.0;

    GeoPoint {
        latitude,
        longitude,
        altitude: p.altitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn origin_maps_to_constant_terms() {
        let geo = lv03_to_wgs84(ProjectedPoint::new(600000.0, 200000.0, 0.0));
        assert_close(geo.latitude, 16.9023892 * 100.0 / 36.0);
        assert_close(geo.longitude, 2.6779094 * 100.0 / 36.0);
        assert_eq!(geo.altitude, 0.0);
    }

    #[test]
    fn altitude_is_preserved() {
        for z in [-12.5, 0.0, 431.0, 4634.2] {
            let geo = lv03_to_wgs84(ProjectedPoint::new(683000.0, 247000.0, z));
            assert_eq!(geo.altitude, z);
        }
    }

    #[test]
    fn zurich_lands_near_zurich() {
        // Zurich main station, roughly 47.378 N / 8.540 E
        let geo = lv03_to_wgs84(ProjectedPoint::new(683200.0, 248000.0, 408.0));
        assert!((geo.latitude - 47.378).abs() < 0.01, "{}", geo.latitude);
        assert!((geo.longitude - 8.540).abs() < 0.01, "{}", geo.longitude);
    }

    #[test]
    fn transform_is_deterministic() {
        let p = ProjectedPoint::new(601000.0, 201000.0, 500.0);
        assert_eq!(lv03_to_wgs84(p), lv03_to_wgs84(p));
    }

    #[test]
    fn position_needs_three_components() {
        assert_eq!(
            ProjectedPoint::from_position(&[601000.0, 201000.0, 500.0]),
            Some(ProjectedPoint::new(601000.0, 201000.0, 500.0))
        );
        assert_eq!(
            ProjectedPoint::from_position(&[601000.0, 201000.0, 500.0, 7.0]),
            Some(ProjectedPoint::new(601000.0, 201000.0, 500.0))
        );
        assert_eq!(ProjectedPoint::from_position(&[601000.0, 201000.0]), None);
        assert_eq!(ProjectedPoint::from_position(&[]), None);
    }
}
