//! Player movement and location history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::LocationName;

/// Where every new session begins.
pub const STARTING_LOCATION: &str = "starting_village";

/// A completed stay at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationVisit {
    pub location: LocationName,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub duration_minutes: u32,
}

impl LocationVisit {
    /// Close out a visit. A clock running backwards yields a zero
    /// duration rather than an error.
    pub fn completed(
        location: LocationName,
        entry_time: DateTime<Utc>,
        exit_time: DateTime<Utc>,
    ) -> Self {
        let minutes = (exit_time - entry_time).num_minutes().max(0);
        Self {
            location,
            entry_time,
            exit_time,
            duration_minutes: minutes as u32,
        }
    }
}

/// Where the player is, where they came from, and every stay before that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationState {
    pub current: LocationName,
    pub previous: Option<LocationName>,
    /// Consecutive entries into the current location.
    pub visit_count: u32,
    /// When the current stay began.
    pub first_visit: DateTime<Utc>,
    pub time_in_location_minutes: u32,
    /// Append-only log of completed stays.
    pub location_history: Vec<LocationVisit>,
}

impl LocationState {
    /// The village square every new session starts in.
    pub fn starting(now: DateTime<Utc>) -> Self {
        Self {
            current: LocationName::new(STARTING_LOCATION)
                .expect("default starting location is a valid name"),
            previous: None,
            visit_count: 1,
            first_visit: now,
            time_in_location_minutes: 0,
            location_history: Vec::new(),
        }
    }

    /// Leave the current location for `new_location`.
    ///
    /// The departed stay is closed into the history. Callers guard
    /// against same-location moves, so the revisit `visit_count`
    /// increment never fires today; it is kept for parity with direct
    /// re-entry.
    pub fn move_to(self, new_location: LocationName, now: DateTime<Utc>) -> Self {
        let mut history = self.location_history;
        history.push(LocationVisit::completed(
            self.current.clone(),
            self.first_visit,
            now,
        ));

        let revisit = new_location == self.current;
        Self {
            previous: Some(self.current),
            visit_count: if revisit { self.visit_count + 1 } else { 1 },
            first_visit: if revisit { self.first_visit } else { now },
            current: new_location,
            time_in_location_minutes: 0,
            location_history: history,
        }
    }
}
