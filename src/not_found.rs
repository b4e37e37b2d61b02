//! The fallback page for routes that do not exist.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{endpoints, html::base};

/// A route handler for unknown routes.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        base(
            "Not Found",
            &html! {
                main class="error-page"
                {
                    h1 { "404 Not Found" }
                    p
                    {
                        "This page does not exist. Head back to the "
                        a href=(endpoints::BUDGET_VIEW) { "budget page" }
                        "."
                    }
                }
            },
        ),
    )
        .into_response()
}
