use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use cinema_hub::{router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let origin = config
        .app_url
        .parse::<HeaderValue>()
        .context("APP_URL is not a valid origin")?;

    let state = AppState::new(config.seat_grid_cells);
    {
        let store = state.store.read().await;
        tracing::info!(
            movies = store.movies.len(),
            theaters = store.board.theaters().len(),
            "loaded fixture catalog"
        );
    }

    let app = router(state).layer(
        CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_origin(origin)
            .allow_headers([
                header::CONTENT_TYPE,
                header::HeaderName::from_static(cinema_hub::auth::ROLE_HEADER),
            ]),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    tracing::info!(address = %config.bind_address, "cinema hub listening");
    axum::serve(listener, app).await?;

    Ok(())
}
