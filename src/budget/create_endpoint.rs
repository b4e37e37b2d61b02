//! Defines the endpoint for adding an income or expense item.
//!
//! This endpoint is the validation gate: the core never sees an empty
//! description or a non-positive amount, because an invalid form suppresses
//! the ledger call entirely and just re-renders the current state.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRequest;
use serde::{Deserialize, Serialize};

use crate::{AppState, endpoints, ledger::Category, orchestrator::Orchestrator};

use super::{ledger_lock_error_response, view::budget_view};

/// The state needed to add an item.
#[derive(Debug, Clone)]
pub struct CreateItemState {
    /// The owner of the session's ledger.
    pub orchestrator: Arc<Mutex<Orchestrator>>,
}

impl FromRef<AppState> for CreateItemState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            orchestrator: state.orchestrator.clone(),
        }
    }
}

/// The form data for adding an item.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemForm {
    /// Income or expense, from the category select (`inc`/`exp`).
    pub category: Category,
    /// Text detailing the item.
    pub description: String,
    /// The amount as typed. Parsed here, not by the extractor, so that a
    /// malformed number suppresses the add instead of failing the request.
    pub value: String,
}

/// A route handler for adding an item.
///
/// A valid form runs the add plus both recalculation passes and responds with
/// the refreshed budget fragment (or a redirect back to the budget page for
/// non-htmx requests). An invalid form responds the same way without touching
/// the ledger.
pub async fn create_item_endpoint(
    State(state): State<CreateItemState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<ItemForm>,
) -> Response {
    let mut orchestrator = match state.orchestrator.lock() {
        Ok(orchestrator) => orchestrator,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return ledger_lock_error_response();
        }
    };

    match parse_valid_amount(&form) {
        Some(value) => {
            let outcome = orchestrator.apply_add(form.category, &form.description, value);
            tracing::debug!(
                "added item {}-{} ({})",
                outcome.record.category.code(),
                outcome.record.id,
                outcome.record.description
            );
        }
        None => tracing::debug!("suppressed add with invalid input: {form:?}"),
    }

    if is_htmx {
        budget_view(orchestrator.ledger()).into_response()
    } else {
        Redirect::to(endpoints::BUDGET_VIEW).into_response()
    }
}

/// The amount from the form, but only when the whole form passes the gate:
/// non-empty description and a finite amount greater than zero.
fn parse_valid_amount(form: &ItemForm) -> Option<f64> {
    if form.description.is_empty() {
        return None;
    }

    let value = form.value.trim().parse::<f64>().ok()?;

    (value.is_finite() && value > 0.0).then_some(value)
}
