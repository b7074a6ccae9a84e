use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Route, RouteType};
use crate::error::{invalid_state_error, Error};
use crate::external::osrm::{RouteOutcome, RouteResult};
use crate::geo;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum DrawMode {
    Idle,
    Auto { waypoints: Vec<Coordinates> },
    Manual { waypoints: Vec<Coordinates> },
}

impl DrawMode {
    pub fn name(&self) -> String {
        match self {
            Self::Idle => "idle".into(),
            Self::Auto { waypoints: _ } => "auto".into(),
            Self::Manual { waypoints: _ } => "manual".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawTool {
    Auto,
    Manual,
}

/// Outcome of a waypoint click: either the session already reflects the
/// click, or a routing calculation must be performed and applied.
#[derive(Clone, Debug)]
pub enum ClickAction {
    Updated,
    Calculate(Calculation),
}

#[derive(Clone, Debug)]
pub struct Calculation {
    pub points: Vec<Coordinates>,
    pub route_type: RouteType,
    pub epoch: u64,
}

/// The in-progress drawing. One session exists per engine; the display
/// layer renders `route_coordinates` and `distance_meters` as they change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingSession {
    pub mode: DrawMode,
    pub route_type: RouteType,
    pub route_coordinates: Vec<Coordinates>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub is_calculating: bool,
    pub routing_warning: Option<String>,
    #[serde(skip)]
    epoch: u64,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self {
            mode: DrawMode::Idle,
            route_type: RouteType::Hiking,
            route_coordinates: Vec::new(),
            distance_meters: 0.0,
            duration_seconds: 0.0,
            is_calculating: false,
            routing_warning: None,
            epoch: 0,
        }
    }

    // Bumping the epoch orphans any calculation still in flight.
    fn reset(&mut self) {
        self.mode = DrawMode::Idle;
        self.route_coordinates = Vec::new();
        self.distance_meters = 0.0;
        self.duration_seconds = 0.0;
        self.is_calculating = false;
        self.routing_warning = None;
        self.epoch += 1;
    }

    #[tracing::instrument]
    pub fn toggle_tool(&mut self, tool: DrawTool) {
        let cancelling = matches!(
            (&self.mode, tool),
            (DrawMode::Auto { .. }, DrawTool::Auto) | (DrawMode::Manual { .. }, DrawTool::Manual)
        );

        self.reset();

        if !cancelling {
            self.mode = match tool {
                DrawTool::Auto => DrawMode::Auto {
                    waypoints: Vec::new(),
                },
                DrawTool::Manual => DrawMode::Manual {
                    waypoints: Vec::new(),
                },
            };
        }
    }

    #[tracing::instrument]
    pub fn set_route_type(&mut self, route_type: RouteType) {
        self.route_type = route_type;
    }

    #[tracing::instrument]
    pub fn add_waypoint(&mut self, point: Coordinates) -> Result<ClickAction, Error> {
        match &mut self.mode {
            DrawMode::Idle => Err(invalid_state_error()),
            DrawMode::Auto { waypoints } => {
                if waypoints.len() >= 2 {
                    // A click on a completed pair starts a fresh route.
                    waypoints.clear();
                    self.route_coordinates = Vec::new();
                    self.distance_meters = 0.0;
                    self.duration_seconds = 0.0;
                    self.is_calculating = false;
                    self.routing_warning = None;
                    self.epoch += 1;
                }

                waypoints.push(point);

                if waypoints.len() < 2 {
                    return Ok(ClickAction::Updated);
                }

                self.is_calculating = true;

                Ok(ClickAction::Calculate(Calculation {
                    points: waypoints.clone(),
                    route_type: self.route_type,
                    epoch: self.epoch,
                }))
            }
            DrawMode::Manual { waypoints } => {
                waypoints.push(point);
                self.route_coordinates = waypoints.clone();
                self.distance_meters = geo::path_length(&self.route_coordinates);

                Ok(ClickAction::Updated)
            }
        }
    }

    /// Applies a finished calculation. Returns false when the result is
    /// stale (the session was reset or restarted while it was in flight),
    /// in which case the session is left untouched.
    #[tracing::instrument(skip(result))]
    pub fn apply_route(&mut self, epoch: u64, result: &RouteResult) -> bool {
        if epoch != self.epoch {
            return false;
        }

        self.is_calculating = false;
        self.route_coordinates = result.coordinates.clone();
        self.distance_meters = result.distance_meters;
        self.duration_seconds = result.duration_seconds;
        self.routing_warning = match &result.outcome {
            RouteOutcome::Routed => None,
            RouteOutcome::Degraded { detail } => Some(format!(
                "automatic routing failed ({}), showing a straight line instead",
                detail
            )),
        };

        true
    }

    pub fn to_route(&self, name: String) -> Route {
        Route::new(
            name,
            self.route_coordinates.clone(),
            self.distance_meters,
            self.route_type,
        )
    }

    #[tracing::instrument]
    pub fn clear(&mut self) {
        self.reset();
    }
}
