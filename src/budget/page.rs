//! Defines the route handler for the budget page, the only view in the app.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState,
    html::base,
    orchestrator::Orchestrator,
    timezone::{local_date_or_utc, month_title},
};

use super::{ledger_lock_error_response, view::budget_view};

/// The state needed to render the budget page.
#[derive(Debug, Clone)]
pub struct BudgetPageState {
    /// The owner of the session's ledger.
    pub orchestrator: Arc<Mutex<Orchestrator>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for BudgetPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            orchestrator: state.orchestrator.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for the budget page: the month headline plus the budget
/// fragment with the current state.
pub async fn get_budget_page(State(state): State<BudgetPageState>) -> Response {
    let orchestrator = match state.orchestrator.lock() {
        Ok(orchestrator) => orchestrator,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return ledger_lock_error_response();
        }
    };

    let headline = month_title(local_date_or_utc(&state.local_timezone));

    base(
        "Budget",
        &html! {
            header class="app-header"
            {
                h1 class="app-header__title" { "Available Budget in " (headline) }
            }

            main class="app-main"
            {
                (budget_view(orchestrator.ledger()))
            }
        },
    )
    .into_response()
}
