use axum::{
    routing::{get, post},
    Extension, Router,
};
use request_checker::availability::handlers::{handle_check, handle_suggest};
use request_checker::blog::handlers::{handle_delete_post, handle_get_posts, handle_save_post};
use request_checker::blog::types::BlogPost;
use request_checker::catalog::handlers::{handle_get_songs, handle_save_songs};
use request_checker::catalog::types::SongListDoc;
use request_checker::config::Config;
use request_checker::layout::handlers::{handle_get_layout, handle_save_layout};
use request_checker::layout::types::LayoutConfig;
use request_checker::ranking::handlers::{
    handle_get_ranking, handle_get_request_ranking, handle_log_request, handle_log_search,
};
use request_checker::ranking::types::{RequestCountDoc, SearchCountDoc};
use request_checker::search::handlers::handle_search;
use request_checker::store::Collection;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = Arc::new(Config::from_args(&args)?);

    tracing::info!("Starting request checker on {}", config.bind_addr);
    tracing::info!("Data directory: {:?}", config.data_dir);
    if config.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN is not set; the admin surface is disabled");
    }
    if config.ai_api_key.is_none() {
        tracing::warn!("AI_API_KEY is not set; the availability check is disabled");
    }

    // 1. Document collections:
    let songs = Arc::new(Collection::<SongListDoc>::open(&config.data_dir, "songlist").await);
    let search_counts =
        Arc::new(Collection::<SearchCountDoc>::open(&config.data_dir, "search_counts").await);
    let request_counts =
        Arc::new(Collection::<RequestCountDoc>::open(&config.data_dir, "request_counts").await);
    let posts = Arc::new(Collection::<BlogPost>::open(&config.data_dir, "blog_posts").await);
    let layout = Arc::new(Collection::<LayoutConfig>::open(&config.data_dir, "layout").await);

    // 2. HTTP Router:
    let app = Router::new()
        .route("/api/songs", get(handle_get_songs).post(handle_save_songs))
        .route("/api/search", get(handle_search))
        .route("/api/log-search", post(handle_log_search))
        .route("/api/log-request", post(handle_log_request))
        .route("/api/get-ranking", get(handle_get_ranking))
        .route("/api/request-ranking", get(handle_get_request_ranking))
        .route(
            "/api/blog",
            get(handle_get_posts)
                .post(handle_save_post)
                .delete(handle_delete_post),
        )
        .route(
            "/api/layout-config",
            get(handle_get_layout).post(handle_save_layout),
        )
        .route("/api/check", post(handle_check))
        .route("/api/suggest", get(handle_suggest))
        .layer(Extension(songs))
        .layer(Extension(search_counts))
        .layer(Extension(request_counts))
        .layer(Extension(posts))
        .layer(Extension(layout))
        .layer(Extension(reqwest::Client::new()))
        .layer(Extension(config.clone()));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
