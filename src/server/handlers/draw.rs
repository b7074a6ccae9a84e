use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::{
    entities::{Coordinates, DrawTool, DrawingSession, Route, RouteType},
    error::Error,
};

#[derive(Serialize, Deserialize)]
pub struct ToolParams {
    tool: DrawTool,
}

#[derive(Serialize, Deserialize)]
pub struct WaypointParams {
    lat: f64,
    lon: f64,
}

#[derive(Serialize, Deserialize)]
pub struct RouteTypeParams {
    #[serde(rename = "type")]
    route_type: RouteType,
}

#[derive(Serialize, Deserialize)]
pub struct SaveParams {
    name: Option<String>,
}

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<DrawingSession>, Error> {
    let session = api.drawing().await?;

    Ok(session.into())
}

pub async fn toggle_tool(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<ToolParams>,
) -> Result<Json<DrawingSession>, Error> {
    let session = api.toggle_tool(params.tool).await?;

    Ok(session.into())
}

pub async fn add_waypoint(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<WaypointParams>,
) -> Result<Json<DrawingSession>, Error> {
    let point = Coordinates {
        latitude: params.lat,
        longitude: params.lon,
    };

    let session = api.add_waypoint(point).await?;

    Ok(session.into())
}

pub async fn set_route_type(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<RouteTypeParams>,
) -> Result<Json<DrawingSession>, Error> {
    let session = api.set_route_type(params.route_type).await?;

    Ok(session.into())
}

pub async fn save(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<SaveParams>,
) -> Result<Json<Option<Route>>, Error> {
    let route = api.save_drawing(params.name).await?;

    Ok(route.into())
}

pub async fn clear(Extension(api): Extension<DynAPI>) -> Result<Json<DrawingSession>, Error> {
    let session = api.clear_drawing().await?;

    Ok(session.into())
}
