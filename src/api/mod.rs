//! HTTP preview server: the rendered site plus a JSON API over the registry.

mod handlers;

use std::sync::Arc;

use axum::{http::HeaderValue, http::Method, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::StylebookConfig;
use crate::error::Result;
use crate::registry::Registry;
use crate::render::{self, Site, SiteOptions};

/// Shared state for all handlers. Pages are rendered once up front.
#[derive(Clone)]
pub struct AppState {
    pub registry: Registry,
    pub site: Arc<Site>,
}

pub fn create_router(registry: Registry, config: &StylebookConfig) -> Result<Router> {
    let site = render::render_site(
        registry.guide(),
        &SiteOptions {
            title: config.site_title.clone(),
        },
    )?;
    let state = AppState {
        registry,
        site: Arc::new(site),
    };

    let api = Router::new()
        .route("/guide", get(handlers::get_guide))
        .route("/categories", get(handlers::list_categories))
        .route("/categories/{id}", get(handlers::get_category))
        .route("/categories/{id}/rules", get(handlers::list_rules))
        .route("/categories/{id}/rules/{rule}", get(handlers::get_rule))
        .route("/search", get(handlers::search))
        .route("/health", get(handlers::health));

    Ok(Router::new()
        .route("/", get(handlers::index_page))
        .route("/{page}", get(handlers::site_page))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config.cors_origins.as_deref())),
        )
        .with_state(state))
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
}
