//! Application host
//!
//! Owns the top-level layout and any extra pages embedded into it, and serves
//! them over HTTP. A host may be created by a page for itself or supplied by a
//! larger application that places pages where it wants them.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::State,
    http::{Method, Uri},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::layout::{render_document, Component};

const DEFAULT_TITLE: &str = "Dash";

/// Paths owned by the host's fixed routes; pages cannot be mounted here
pub const RESERVED_PATHS: &[&str] = &["/", "/_dash-layout", "/health"];

pub struct DashApp {
    name: String,
    title: String,
    layout: RwLock<Option<Component>>,
    pages: RwLock<BTreeMap<String, Component>>,
}

impl DashApp {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: DEFAULT_TITLE.to_string(),
            layout: RwLock::new(None),
            pages: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Top-level layout served at `/`
    pub fn layout(&self) -> Option<Component> {
        read(&self.layout).clone()
    }

    pub fn set_layout(&self, layout: Component) {
        *write(&self.layout) = Some(layout);
    }

    /// Embed a page at `path`. Paths in [`RESERVED_PATHS`] are rejected.
    pub fn add_page(&self, path: &str, page: Component) -> Result<(), AppError> {
        let path = normalize_path(path);
        if RESERVED_PATHS.contains(&path.as_str()) {
            tracing::warn!(app = %self.name, %path, "Refusing to register page at reserved path");
            return Err(AppError::ReservedPath(path));
        }

        tracing::debug!(app = %self.name, %path, "Registering page");
        write(&self.pages).insert(path, page);
        Ok(())
    }

    pub fn page(&self, path: &str) -> Option<Component> {
        read(&self.pages).get(&normalize_path(path)).cloned()
    }

    pub fn page_paths(&self) -> Vec<String> {
        read(&self.pages).keys().cloned().collect()
    }

    pub fn router(self: &Arc<Self>) -> Router {
        Router::new()
            .route("/", get(index))
            .route("/_dash-layout", get(layout_json))
            .route("/health", get(health))
            .fallback(page)
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(self))
    }
}

impl std::fmt::Debug for DashApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashApp")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("pages", &self.page_paths())
            .finish_non_exhaustive()
    }
}

// Values behind the locks are plain data, so a poisoned lock is still usable.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    format!("/{trimmed}")
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn index(State(app): State<Arc<DashApp>>) -> Result<Html<String>, AppError> {
    let layout = app.layout().ok_or(AppError::LayoutNotSet)?;
    Ok(Html(render_document(app.title(), &layout)))
}

async fn layout_json(State(app): State<Arc<DashApp>>) -> Result<Json<Value>, AppError> {
    let layout = app.layout().ok_or(AppError::LayoutNotSet)?;
    Ok(Json(layout.to_json()))
}

async fn page(
    State(app): State<Arc<DashApp>>,
    method: Method,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::MethodNotAllowed(method.to_string()));
    }

    let raw = uri.path();
    let path = urlencoding::decode(raw).unwrap_or(std::borrow::Cow::Borrowed(raw));
    let page = app
        .page(&path)
        .ok_or_else(|| AppError::PageNotFound(path.to_string()))?;
    Ok(Html(render_document(app.title(), &page)))
}
