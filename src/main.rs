use senda::db::SqlitePool;
use senda::engine::Engine;
use senda::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_uri =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://senda.db".to_string());

    let SqlitePool(pool) = SqlitePool::new(&db_uri, 5).await.unwrap();

    let engine = Engine::new(pool).await.unwrap();

    serve(engine).await;
}
