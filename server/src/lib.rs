//! HTTP front end for the in-memory todo list.
//!
//! # Overview
//! Routes:
//! - `GET /` serves `index.html` from the configured static directory.
//! - `GET /todos` lists every item as a JSON array.
//! - `POST /todos` creates an item from a JSON `{title, body}` object.
//! - `DELETE /todos/{id}` removes an item; 204 on success, 404 if absent.
//!
//! # Design
//! Handlers hold no state of their own. The `ItemStore` is built once by the
//! caller and injected through `AppState`, so tests can run any number of
//! independent apps side by side.

pub mod config;
pub mod error;
mod handlers;

use std::{future::Future, path::PathBuf, sync::Arc};

use axum::{
    routing::{delete, get},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use config::Config;
pub use error::ApiError;
pub use todo_core::{Item, ItemStore, NewItem};

/// `EnvFilter` directives used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "todo_server=info,todo_core=info,tower_http=info";

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<ItemStore>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(store: ItemStore, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(store),
            static_dir: static_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.store(), config.static_dir.clone())
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route("/todos/{id}", delete(handlers::delete_todo))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Serves `app(state)` on `listener`. Stops accepting connections once
/// `shutdown` resolves and returns after in-flight requests finish.
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}
