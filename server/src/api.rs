use crate::config::Config;
use crate::loader::Loader;
use crate::{render, AppError, Result};
use app::RecipeAppProps;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use axum_extra::routing::{RouterExt, TypedPath};
use models::{ApiConfig, RecipeCard, RecipeId};
use serde::Deserialize;
use std::path::Path;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};

/// Internal server state.
#[derive(Clone, Debug)]
pub struct State {
    loader: Loader,
    api: ApiConfig,
}

impl State {
    /// Create a new `State` object talking to the backend at `api`.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            loader: Loader::new(api.clone()),
            api,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", self)).into_response()
    }
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/:id")]
struct RecipeRoute {
    id: RecipeId,
}

#[instrument(skip(state))]
async fn get_recipe(
    RecipeRoute { id }: RecipeRoute,
    Extension(state): Extension<State>,
) -> Result<Html<String>> {
    let recipe = state.loader.load(&id).await?;
    let recipe = RecipeCard::try_from(recipe)?;

    let page = render::page(RecipeAppProps {
        recipe,
        api: state.api.clone(),
    })
    .await?;

    Ok(Html(page))
}

/// Build the page routes. Built assets are served from `dist`.
pub fn router(state: State, dist: &Path) -> Router {
    let trace = TraceLayer::new_for_http();

    let extension = Extension(state);

    let compression = CompressionLayer::new().gzip(true).deflate(true);

    Router::new()
        .typed_get(get_recipe)
        .route_service("/", ServeFile::new(dist.join("index.html")))
        .route_service("/favicon.ico", ServeFile::new(dist.join("favicon.ico")))
        .nest_service("/static", ServeDir::new(dist))
        .layer(
            ServiceBuilder::new()
                .layer(compression)
                .layer(trace)
                .layer(extension),
        )
}

/// Start the web server.
#[instrument(skip_all)]
pub async fn run(state: State, config: &Config) -> Result<()> {
    let listener = TcpListener::bind(config.listen).await?;
    info!("Serving recipe pages on {}", config.listen);

    axum::serve(listener, router(state, &config.dist)).await?;

    Ok(())
}
