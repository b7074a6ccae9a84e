use serde::{Deserialize, Serialize};

/// A geographic position, serialized as a `[latitude, longitude]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<[f64; 2]> for Coordinates {
    fn from(pair: [f64; 2]) -> Self {
        Self {
            latitude: pair[0],
            longitude: pair[1],
        }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coordinates: Coordinates) -> Self {
        [coordinates.latitude, coordinates.longitude]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_latitude_longitude_pair() {
        let point = Coordinates {
            latitude: 40.4168,
            longitude: -3.7038,
        };

        let value = serde_json::to_value(point).unwrap();
        assert_eq!(value, serde_json::json!([40.4168, -3.7038]));

        let back: Coordinates = serde_json::from_value(value).unwrap();
        assert_eq!(back, point);
    }
}
