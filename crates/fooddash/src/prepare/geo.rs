//! Great-circle distance on a spherical Earth.

use crate::schema::GeoPoint;

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine distance between two points, in kilometres.
///
/// Returns exactly `0.0` when both points are equal and is never negative.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1]
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Whether a point lies within valid latitude/longitude bounds.
pub fn in_bounds(point: GeoPoint) -> bool {
    (-90.0..=90.0).contains(&point.latitude) && (-180.0..=180.0).contains(&point.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = GeoPoint::new(12.9716, 77.5946);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // Bangalore to Chennai, roughly 290 km
        let bangalore = GeoPoint::new(12.9716, 77.5946);
        let chennai = GeoPoint::new(13.0827, 80.2707);
        let d = haversine_km(bangalore, chennai);
        assert!((d - 290.2).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_symmetric() {
        let a = GeoPoint::new(22.745049, 75.892471);
        let b = GeoPoint::new(22.765049, 75.912471);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn test_quarter_meridian() {
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(90.0, 0.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_bounds() {
        assert!(in_bounds(GeoPoint::new(-90.0, 180.0)));
        assert!(!in_bounds(GeoPoint::new(90.5, 0.0)));
        assert!(!in_bounds(GeoPoint::new(0.0, -180.1)));
    }
}
