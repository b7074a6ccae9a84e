use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

/// A saved route. Records are immutable once created; editing a route
/// produces a new record under the same id via upsert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: Uuid,
    pub name: String,
    pub points: Vec<Coordinates>,
    pub created_at: i64,
    pub distance: i64,
    #[serde(rename = "type")]
    pub kind: RouteType,
}

impl Route {
    pub fn new(name: String, points: Vec<Coordinates>, distance_meters: f64, kind: RouteType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            points,
            created_at: Utc::now().timestamp_millis(),
            distance: distance_meters.round() as i64,
            kind,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Hiking,
    Cycling,
    Car,
}
