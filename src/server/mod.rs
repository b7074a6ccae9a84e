mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::server::handlers::{draw, routes};

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/routes", get(routes::list))
        .route("/routes/import", post(routes::import))
        .route("/routes/:id", get(routes::find).delete(routes::remove))
        .route("/draw", get(draw::find))
        .route("/draw/tool", post(draw::toggle_tool))
        .route("/draw/waypoints", post(draw::add_waypoint))
        .route("/draw/route_type", patch(draw::set_route_type))
        .route("/draw/save", post(draw::save))
        .route("/draw/clear", post(draw::clear))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
