use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::{
    entities::{Coordinates, RouteType},
    error::{upstream_error, Error},
    geo,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    Foot,
    Bike,
    Car,
}

impl Profile {
    fn osrm_name(&self) -> &'static str {
        match self {
            Self::Foot => "foot",
            Self::Bike => "bike",
            Self::Car => "driving",
        }
    }
}

impl From<RouteType> for Profile {
    fn from(route_type: RouteType) -> Self {
        match route_type {
            RouteType::Hiking => Self::Foot,
            RouteType::Cycling => Self::Bike,
            RouteType::Car => Self::Car,
        }
    }
}

#[derive(Clone, Debug)]
pub enum RouteOutcome {
    Routed,
    Degraded { detail: String },
}

#[derive(Clone, Debug)]
pub struct RouteResult {
    pub coordinates: Vec<Coordinates>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub outcome: RouteOutcome,
}

impl RouteResult {
    pub fn is_routed(&self) -> bool {
        matches!(self.outcome, RouteOutcome::Routed)
    }

    fn degraded(points: &[Coordinates], detail: String) -> Self {
        Self {
            coordinates: points.to_vec(),
            distance_meters: geo::path_length(points),
            duration_seconds: 0.0,
            outcome: RouteOutcome::Degraded { detail },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct OsrmRoute {
    geometry: Geometry,
    distance: f64,
    duration: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

/// Calculates a route along the road or trail network between waypoints.
///
/// Never fails: when the routing backend is unreachable or answers
/// unusably, the result degrades to the straight line between the input
/// points with its geodesic length.
#[tracing::instrument]
pub async fn calculate_route(points: &[Coordinates], profile: Profile) -> RouteResult {
    if points.len() < 2 {
        return RouteResult {
            coordinates: points.to_vec(),
            distance_meters: 0.0,
            duration_seconds: 0.0,
            outcome: RouteOutcome::Degraded {
                detail: "at least two waypoints are required".into(),
            },
        };
    }

    match request_route(points, profile).await {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!("routing backend unavailable: {}", err.message);
            RouteResult::degraded(points, err.message)
        }
    }
}

async fn request_route(points: &[Coordinates], profile: Profile) -> Result<RouteResult, Error> {
    let api_base = env::var("OSRM_API_BASE")?;

    let coords = points
        .iter()
        .map(|point| format!("{},{}", point.longitude, point.latitude))
        .collect::<Vec<_>>()
        .join(";");

    let url = format!(
        "https://{}/route/v1/{}/{}",
        api_base,
        profile.osrm_name(),
        coords
    );

    let res = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?
        .get(url)
        .query(&[("overview", "full"), ("geometries", "geojson")])
        .send()
        .await?;

    if res.status().as_u16() != 200 {
        return Err(upstream_error());
    }

    let data: Response = res.json().await?;

    if data.code != "Ok" {
        return Err(upstream_error());
    }

    let route = data.routes.first().ok_or_else(upstream_error)?;

    let coordinates = route
        .geometry
        .coordinates
        .iter()
        .map(|&[longitude, latitude]| Coordinates {
            latitude,
            longitude,
        })
        .collect();

    Ok(RouteResult {
        coordinates,
        distance_meters: route.distance,
        duration_seconds: route.duration,
        outcome: RouteOutcome::Routed,
    })
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
    fn route_types_map_onto_routing_profiles() {
        assert_eq!(Profile::from(RouteType::Hiking), Profile::Foot);
        assert_eq!(Profile::from(RouteType::Cycling), Profile::Bike);
        assert_eq!(Profile::from(RouteType::Car), Profile::Car);
    }

    #[test]
    fn fewer_than_two_points_degrade_without_a_request() {
        let points = [point(40.0, -3.0)];

        let result = tokio_test::block_on(calculate_route(&points, Profile::Foot));

        assert!(!result.is_routed());
        assert_eq!(result.coordinates, points);
        assert_eq!(result.distance_meters, 0.0);
        assert_eq!(result.duration_seconds, 0.0);
    }

    #[test]
    fn unreachable_backend_degrades_to_the_straight_line() {
        env::set_var("OSRM_API_BASE", "127.0.0.1:1");

        let points = [point(40.4168, -3.7038), point(41.3874, 2.1686)];

        let result = tokio_test::block_on(calculate_route(&points, Profile::Bike));

        assert!(!result.is_routed());
        assert_eq!(result.coordinates, points);
        assert!((result.distance_meters - geo::path_length(&points)).abs() < 1e-6);
        assert_eq!(result.duration_seconds, 0.0);
    }
}
