use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{DrawAPI, RouteAPI},
    entities::{ClickAction, Coordinates, DrawTool, DrawingSession, Route, RouteType},
    error::{invalid_state_error, Error},
    external::osrm,
};

#[async_trait]
impl DrawAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn drawing(&self) -> Result<DrawingSession, Error> {
        Ok(self.session.lock().await.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn toggle_tool(&self, tool: DrawTool) -> Result<DrawingSession, Error> {
        let mut session = self.session.lock().await;
        session.toggle_tool(tool);

        tracing::info!("drawing mode is now {}", session.mode.name());

        Ok(session.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn add_waypoint(&self, point: Coordinates) -> Result<DrawingSession, Error> {
        let calculation = {
            let mut session = self.session.lock().await;

            match session.add_waypoint(point)? {
                ClickAction::Updated => return Ok(session.clone()),
                ClickAction::Calculate(calculation) => calculation,
            }
        };

        // The lock is released while the routing request is in flight so
        // the session stays responsive; the epoch decides whether the
        // result still applies when it lands.
        let result =
            osrm::calculate_route(&calculation.points, calculation.route_type.into()).await;

        let mut session = self.session.lock().await;

        if !session.apply_route(calculation.epoch, &result) {
            tracing::warn!("discarding superseded routing result");
        }

        Ok(session.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn set_route_type(&self, route_type: RouteType) -> Result<DrawingSession, Error> {
        let mut session = self.session.lock().await;
        session.set_route_type(route_type);

        Ok(session.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn save_drawing(&self, name: Option<String>) -> Result<Option<Route>, Error> {
        let name = match name.map(|name| name.trim().to_string()) {
            Some(name) if !name.is_empty() => name,
            _ => {
                tracing::info!("save abandoned: no route name given");
                return Ok(None);
            }
        };

        let mut session = self.session.lock().await;

        if session.route_coordinates.is_empty() {
            return Err(invalid_state_error());
        }

        let route = self.save_route(session.to_route(name)).await?;

        tracing::info!(%route.id, "drawing saved");
        session.clear();

        Ok(Some(route))
    }

    #[tracing::instrument(skip(self))]
    async fn clear_drawing(&self) -> Result<DrawingSession, Error> {
        let mut session = self.session.lock().await;
        session.clear();

        Ok(session.clone())
    }
}
