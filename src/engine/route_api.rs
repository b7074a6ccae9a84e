use super::Engine;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::RouteAPI,
    entities::Route,
    error::{invalid_input_error, Error},
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn save_route(&self, route: Route) -> Result<Route, Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO routes (id, created_at, data) VALUES ($1, $2, $3)
                 ON CONFLICT(id) DO UPDATE SET created_at = excluded.created_at, data = excluded.data",
            )
            .bind(route.id.to_string())
            .bind(route.created_at)
            .bind(Json(&route)),
        )
        .await?;

        Ok(route)
    }

    #[tracing::instrument(skip(self))]
    async fn find_route(&self, id: Uuid) -> Result<Route, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM routes WHERE id = $1").bind(id.to_string()))
            .await?;

        let result = maybe_result.ok_or_else(invalid_input_error)?;
        let Json(route) = result.try_get("data")?;

        Ok(route)
    }

    #[tracing::instrument(skip(self))]
    async fn list_routes(&self) -> Result<Vec<Route>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut results =
            conn.fetch(sqlx::query("SELECT data FROM routes ORDER BY created_at ASC"));

        let mut routes = Vec::new();

        while let Some(row) = results.try_next().await? {
            let Json(route) = row.try_get("data")?;
            routes.push(route);
        }

        Ok(routes)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_route(&self, id: Uuid) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(sqlx::query("DELETE FROM routes WHERE id = $1").bind(id.to_string()))
            .await?;

        Ok(())
    }
}
