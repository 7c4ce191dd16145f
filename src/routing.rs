//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::{AppState, Error, earnings::get_earnings_page, endpoints};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::EARNINGS_VIEW, get(get_earnings_page))
        .route(endpoints::COFFEE, get(get_coffee))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}

/// The root path '/' redirects to the earnings page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::EARNINGS_VIEW)
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
