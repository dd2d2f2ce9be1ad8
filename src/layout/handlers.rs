use super::types::LayoutConfig;
use crate::admin;
use crate::config::Config;
use crate::store::Collection;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

/// Key of the single layout document inside the `layout` collection.
pub const LAYOUT_KEY: &str = "config";

#[derive(Serialize)]
pub struct SaveLayoutResponse {
    pub success: bool,
}

/// `GET /api/layout-config`: the stored layout, or the built-in default.
pub async fn handle_get_layout(
    Extension(layout): Extension<Arc<Collection<LayoutConfig>>>,
) -> Json<LayoutConfig> {
    Json(layout.get(LAYOUT_KEY).unwrap_or_default())
}

/// `POST /api/layout-config`: replace the layout document. Admin only.
pub async fn handle_save_layout(
    Extension(layout): Extension<Arc<Collection<LayoutConfig>>>,
    Extension(config): Extension<Arc<Config>>,
    headers: HeaderMap,
    Json(new_layout): Json<LayoutConfig>,
) -> (StatusCode, Json<SaveLayoutResponse>) {
    if !admin::is_authorized(&config, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(SaveLayoutResponse { success: false }),
        );
    }

    match layout.put(LAYOUT_KEY, new_layout).await {
        Ok(_) => (StatusCode::OK, Json(SaveLayoutResponse { success: true })),
        Err(e) => {
            tracing::error!("Failed to save layout config: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveLayoutResponse { success: false }),
            )
        }
    }
}
