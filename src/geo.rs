use crate::entities::Coordinates;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points, in metres.
pub fn haversine_distance(from: Coordinates, to: Coordinates) -> f64 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Cumulative length of a polyline, in metres. Fewer than 2 points is 0.
pub fn path_length(coords: &[Coordinates]) -> f64 {
    coords
        .windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude,
            longitude,
        }
    }

    #[test]
    fn degenerate_paths_have_zero_length() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[point(40.0, -3.0)]), 0.0);
    }

    #[test]
    fn path_length_is_direction_invariant() {
        let mut path = vec![
            point(40.4168, -3.7038),
            point(40.9, -1.0),
            point(41.3874, 2.1686),
        ];

        let out = path_length(&path);
        path.reverse();
        let back = path_length(&path);

        assert!((out - back).abs() < 1e-6);
    }

    #[test]
    fn madrid_to_barcelona_is_about_505_km() {
        let path = [point(40.4168, -3.7038), point(41.3874, 2.1686)];
        let distance = path_length(&path);

        assert!((distance - 505_000.0).abs() < 5_000.0, "got {}", distance);
    }

    #[test]
    fn path_length_sums_consecutive_legs() {
        let a = point(40.0, -3.0);
        let b = point(40.1, -3.0);
        let c = point(40.2, -3.0);

        let total = path_length(&[a, b, c]);
        let legs = haversine_distance(a, b) + haversine_distance(b, c);

        assert!((total - legs).abs() < 1e-6);
    }
}
