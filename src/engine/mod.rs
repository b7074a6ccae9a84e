mod draw_api;
mod import_api;
mod route_api;

use sqlx::{Executor, Pool, Sqlite};
use tokio::sync::Mutex;

use crate::{api::API, entities::DrawingSession, error::Error};

type Database = Sqlite;

pub struct Engine {
    pool: Pool<Database>,
    session: Mutex<DrawingSession>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        // route store (KV store keyed by id, ordered by creation time)
        pool.execute(
            "CREATE TABLE IF NOT EXISTS routes (id TEXT PRIMARY KEY, created_at INTEGER NOT NULL, data TEXT NOT NULL)",
        )
        .await?;
        pool.execute("CREATE INDEX IF NOT EXISTS routes_created_at ON routes (created_at)")
            .await?;

        Ok(Self {
            pool,
            session: Mutex::new(DrawingSession::new()),
        })
    }
}

impl API for Engine {}

#[cfg(test)]
pub(crate) async fn test_engine() -> Engine {
    use crate::db::SqlitePool;

    let SqlitePool(pool) = SqlitePool::new("sqlite::memory:", 1).await.unwrap();

    Engine::new(pool).await.unwrap()
}
