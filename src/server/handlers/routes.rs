use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::{
    entities::{Route, RouteType},
    error::Error,
};

#[derive(Serialize, Deserialize)]
pub struct ImportParams {
    name: String,
    document: String,
    #[serde(rename = "type")]
    route_type: RouteType,
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Route>>, Error> {
    let routes = api.list_routes().await?;

    Ok(routes.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Route>, Error> {
    let route = api.find_route(id).await?;

    Ok(route.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, Error> {
    api.delete_route(id).await?;

    Ok(().into())
}

pub async fn import(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<ImportParams>,
) -> Result<Json<Option<Route>>, Error> {
    let route = api
        .import_gpx(params.name, params.document, params.route_type)
        .await?;

    Ok(route.into())
}
