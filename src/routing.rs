//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::{create_item_endpoint, delete_item_endpoint, get_budget_page},
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::BUDGET_VIEW, get(get_budget_page))
        .route(endpoints::POST_ITEM, post(create_item_endpoint))
        .route(endpoints::DELETE_ITEM, delete(delete_item_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
