//! Role-gated redirects for page requests.
//!
//! API routes answer 401/403 themselves; only page navigations are redirected here.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{middleware::auth::AuthGuard, state::AppState};

pub use crate::model::route::redirect_for;

/// Paths that are never redirected: the JSON API, uploaded files and bundled assets.
fn is_exempt(path: &str) -> bool {
    if path.starts_with("/api/") || path == "/api" || path.starts_with("/uploads/") {
        return true;
    }

    // Static files such as /assets/main.css or /wasm/folio_bg.wasm
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

/// Axum middleware applying `redirect_for` to page requests.
pub async fn route_guard(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if is_exempt(&path) {
        return next.run(request).await;
    }

    let role = match AuthGuard::new(&state.db, &session).current_user().await {
        Ok(user) => user.map(|u| u.role),
        Err(e) => return e.into_response(),
    };

    match redirect_for(&path, role) {
        Some(target) => {
            tracing::debug!("Redirecting {} to {}", path, target);
            Redirect::to(target).into_response()
        }
        None => next.run(request).await,
    }
}
