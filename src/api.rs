use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Coordinates, DrawTool, DrawingSession, Route, RouteType};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    async fn save_route(&self, route: Route) -> Result<Route, Error>;

    async fn find_route(&self, id: Uuid) -> Result<Route, Error>;

    async fn list_routes(&self) -> Result<Vec<Route>, Error>;

    async fn delete_route(&self, id: Uuid) -> Result<(), Error>;
}

#[async_trait]
pub trait DrawAPI {
    async fn drawing(&self) -> Result<DrawingSession, Error>;

    async fn toggle_tool(&self, tool: DrawTool) -> Result<DrawingSession, Error>;

    async fn add_waypoint(&self, point: Coordinates) -> Result<DrawingSession, Error>;

    async fn set_route_type(&self, route_type: RouteType) -> Result<DrawingSession, Error>;

    async fn save_drawing(&self, name: Option<String>) -> Result<Option<Route>, Error>;

    async fn clear_drawing(&self) -> Result<DrawingSession, Error>;
}

#[async_trait]
pub trait ImportAPI {
    async fn import_gpx(
        &self,
        name: String,
        document: String,
        route_type: RouteType,
    ) -> Result<Option<Route>, Error>;
}

pub trait API: RouteAPI + DrawAPI + ImportAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
