//! The web adapter for the budget: the page, the add/delete endpoints, and
//! the rendered fragment they all share.
//!
//! This layer owns input validation and the composite element ids; all
//! financial state and arithmetic stays in [crate::ledger] behind the
//! [crate::orchestrator::Orchestrator].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{Error, html::base};

mod create_endpoint;
mod delete_endpoint;
mod page;
mod slug;
mod view;

pub use create_endpoint::{ItemForm, create_item_endpoint};
pub use delete_endpoint::delete_item_endpoint;
pub use page::get_budget_page;
pub use slug::ItemSlug;
pub use view::budget_view;

/// The response for a handler that could not lock the ledger.
pub(crate) fn ledger_lock_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        base(
            "Error",
            &html! {
                main class="error-page"
                {
                    h1 { "Something went wrong" }
                    p { (Error::LedgerLockError) ". Restart the server and try again." }
                }
            },
        ),
    )
        .into_response()
}
