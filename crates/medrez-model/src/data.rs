//! `AppData` aggregate root
//!
//! The single in-memory dataset the store owns: four insertion-ordered
//! collections. Consumers receive read-only snapshots; all mutation goes
//! through the store's append operations.

use crate::{Attorney, Case, CaseEvent, Provider};
use serde::{Deserialize, Serialize};

/// The full application dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    pub providers: Vec<Provider>,
    pub attorneys: Vec<Attorney>,
    pub cases: Vec<Case>,
    pub events: Vec<CaseEvent>,
}

impl AppData {
    /// Copy of this dataset with `case` appended
    ///
    /// Append-only: existing collections are untouched. Id uniqueness is
    /// the producer's responsibility; a duplicate id shadows the existing
    /// case only for first-match lookups.
    #[must_use]
    pub fn with_case(&self, case: Case) -> Self {
        let mut next = self.clone();
        next.cases.push(case);
        next
    }

    /// Copy of this dataset with `event` appended
    #[must_use]
    pub fn with_event(&self, event: CaseEvent) -> Self {
        let mut next = self.clone();
        next.events.push(event);
        next
    }
}
