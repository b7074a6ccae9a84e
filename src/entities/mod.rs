mod coordinates;
mod route;
mod session;

pub use coordinates::Coordinates;
pub use route::{Route, RouteType};
pub use session::{Calculation, ClickAction, DrawMode, DrawTool, DrawingSession};
