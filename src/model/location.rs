//! Composite location: where the player is, derived from the journal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Star system plus station.
///
/// Never stored; recomputed from the latest matching journal events.
/// `station` is empty while undocked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub system: String,
    pub station: String,
}

impl Location {
    pub fn is_docked(&self) -> bool {
        !self.station.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_docked() {
            write!(f, "{} / {}", self.system, self.station)
        } else {
            f.write_str(&self.system)
        }
    }
}
