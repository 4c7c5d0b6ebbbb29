//! Planar distance approximation used for technician suggestions.
//!
//! RULE: This is a fixed local approximation, not a geodesic formula.
//! The scale factors are calibrated for the service area near 24-25°N
//! and every recorded hand-off distance depends on them. Do not replace
//! with haversine without re-deriving all expected distances.

use serde::{Deserialize, Serialize};

/// Kilometres per degree of latitude.
const KM_PER_DEG_LAT: f64 = 111.0;
/// Kilometres per degree of longitude near the service area.
const KM_PER_DEG_LON: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Approximate straight-line distance between two points, in kilometres.
/// Pure and total over finite inputs; identical points yield exactly 0.
pub fn estimate_distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let dx = (a.latitude - b.latitude) * KM_PER_DEG_LAT;
    let dy = (a.longitude - b.longitude) * KM_PER_DEG_LON;
    (dx * dx + dy * dy).sqrt()
}

/// Round to one decimal place, as recorded on hand-off records.
pub fn round_km(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_km() {
        let p = GeoPoint::new(24.774265, 46.738586);
        assert_eq!(estimate_distance_km(p, p), 0.0);
    }

    #[test]
    fn latitude_degree_scales_at_111_km() {
        let a = GeoPoint::new(25.0, 46.7);
        let b = GeoPoint::new(24.0, 46.7);
        assert!((estimate_distance_km(a, b) - 111.0).abs() < 1e-9);
    }

    #[test]
    fn longitude_degree_scales_at_95_km() {
        let a = GeoPoint::new(24.7, 47.0);
        let b = GeoPoint::new(24.7, 46.0);
        assert!((estimate_distance_km(a, b) - 95.0).abs() < 1e-9);
    }

    #[test]
    fn round_km_keeps_one_decimal() {
        assert_eq!(round_km(1.8734), 1.9);
        assert_eq!(round_km(2.04), 2.0);
    }
}
