//! Great-circle distance

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::coord::GeoPoint;

/// Distance between two points in kilometers (spherical law of cosines)
///
/// When rounding pushes the arccosine argument outside `[-1, 1]` the distance
/// is reported as 0.0 rather than NaN. This also happens for near-antipodal
/// points, which can then look spuriously close.
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let cosine = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos();
    if !(-1.0..=1.0).contains(&cosine) {
        return 0.0;
    }

    cosine.acos() * EARTH_RADIUS_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paris_to_london() {
        let paris = GeoPoint::new(48.8566, 2.3522);
        let london = GeoPoint::new(51.5074, -0.1278);

        let distance = great_circle_distance(paris, london);
        assert!(
            (distance - 343.5).abs() < 2.0,
            "Distance {} should be approximately 343.5",
            distance
        );
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = GeoPoint::new(40.0, -74.0);
        let b = GeoPoint::new(41.0, -74.0);
        assert!((great_circle_distance(a, b) - 111.19).abs() < 0.1);
    }

    #[test]
    fn test_identical_points() {
        let p = GeoPoint::new(37.37077, -122.05903);
        let distance = great_circle_distance(p, p);
        assert!(distance.is_finite());
        assert!(distance < 0.001);
    }

    #[test]
    fn test_rounding_above_one_is_zero() {
        // sin²φ + cos²φ rounds to 1.0000000000000002 at these latitudes
        for lat in [-84.85714285714286, -82.0] {
            let p = GeoPoint::new(lat, 10.0);
            assert_eq!(great_circle_distance(p, p), 0.0);
        }
    }

    #[test]
    fn test_antipodal_rounding_below_minus_one_is_zero() {
        let a = GeoPoint::new(12.0, 10.0);
        let b = GeoPoint::new(-12.0, -170.0);
        assert_eq!(great_circle_distance(a, b), 0.0);
    }

    #[test]
    fn test_nan_is_zero() {
        let nan = GeoPoint::new(f64::NAN, 0.0);
        assert_eq!(great_circle_distance(nan, GeoPoint::new(45.0, 10.0)), 0.0);
    }
}
