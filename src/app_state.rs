//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{ledger::Ledger, orchestrator::Orchestrator};

/// The state of the web server.
///
/// The orchestrator (and through it the session's ledger) lives behind a
/// mutex because axum handlers may run on any worker thread. Each handler
/// locks, performs one synchronous call-and-return operation, and unlocks, so
/// the ledger still only ever sees one user action at a time.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single owner of the session's ledger.
    pub orchestrator: Arc<Mutex<Orchestrator>>,

    /// The local timezone as a canonical timezone name, e.g.
    /// "Pacific/Auckland", used for the month headline.
    pub local_timezone: String,
}

impl AppState {
    /// Create the state for a new session with an empty ledger.
    pub fn new(local_timezone: &str) -> Self {
        Self {
            orchestrator: Arc::new(Mutex::new(Orchestrator::new(Ledger::new()))),
            local_timezone: local_timezone.to_owned(),
        }
    }
}
