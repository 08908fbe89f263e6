use anyhow::Result;
use axum::http::HeaderValue;
use todo_api::{app, db::driver::Db, AppState};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let db_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todo.db".to_string());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let allowed_origin =
        std::env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let db = Db::connect(&db_url).await?;

    // browsers are only allowed in from the one configured origin
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = app(AppState::new(db)).layer(cors);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("listening on http://{bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
