//! Defines the endpoint for deleting an item by its composite element id.
//!
//! Delete requests always originate from a rendered row, so a slug that does
//! not parse or does not match a record indicates a harmless race (e.g. a
//! double-click), not a fault. Both cases fall through to the same response
//! as a successful delete: the refreshed budget fragment.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;

use crate::{AppState, endpoints, orchestrator::Orchestrator};

use super::{ledger_lock_error_response, slug::ItemSlug, view::budget_view};

/// The state needed to delete an item.
#[derive(Debug, Clone)]
pub struct DeleteItemState {
    /// The owner of the session's ledger.
    pub orchestrator: Arc<Mutex<Orchestrator>>,
}

impl FromRef<AppState> for DeleteItemState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            orchestrator: state.orchestrator.clone(),
        }
    }
}

/// A route handler for deleting an item, responds with the refreshed budget
/// fragment whether or not the item still existed.
pub async fn delete_item_endpoint(
    State(state): State<DeleteItemState>,
    HxRequest(is_htmx): HxRequest,
    Path(item_slug): Path<String>,
) -> Response {
    let mut orchestrator = match state.orchestrator.lock() {
        Ok(orchestrator) => orchestrator,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return ledger_lock_error_response();
        }
    };

    match item_slug.parse::<ItemSlug>() {
        Ok(slug) => {
            orchestrator.apply_delete(slug.category, slug.id);
            tracing::debug!("deleted item {slug}");
        }
        Err(error) => tracing::debug!("ignoring delete request: {error}"),
    }

    if is_htmx {
        budget_view(orchestrator.ledger()).into_response()
    } else {
        Redirect::to(endpoints::BUDGET_VIEW).into_response()
    }
}
