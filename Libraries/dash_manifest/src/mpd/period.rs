use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;
use crate::mpd::AdaptationSet;
use crate::track::TrackType;

/// One period of a presentation and the adaptation sets it offers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    /// Start of the period relative to the start of the presentation, in milliseconds.
    start_ms: i64,
    adaptation_sets: Arc<[AdaptationSet]>,
}

#[derive(Deserialize)]
struct RawPeriod {
    id: Option<String>,
    start_ms: i64,
    adaptation_sets: Vec<AdaptationSet>,
}

impl TryFrom<RawPeriod> for Period {
    type Error = ManifestError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Period::new(raw.id, raw.start_ms, raw.adaptation_sets)
    }
}

impl Period {
    /// Fails if two adaptation sets declare the same id. Sets without an id never collide.
    pub fn new(
        id: Option<String>,
        start_ms: i64,
        adaptation_sets: impl Into<Arc<[AdaptationSet]>>,
    ) -> Result<Self, ManifestError> {
        let adaptation_sets = adaptation_sets.into();

        let mut seen = HashSet::new();
        for set in adaptation_sets.iter().filter(|s| s.has_id()) {
            if !seen.insert(set.id()) {
                return Err(ManifestError::DuplicateAdaptationSetId { id: set.id() });
            }
        }

        Ok(Self {
            id,
            start_ms,
            adaptation_sets,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    pub fn adaptation_sets(&self) -> &[AdaptationSet] {
        &self.adaptation_sets
    }

    /// Index of the first adaptation set carrying `track_type`.
    pub fn adaptation_set_index(&self, track_type: TrackType) -> Option<usize> {
        self.adaptation_sets
            .iter()
            .position(|set| set.track_type() == track_type)
    }

    /// Looks up a set by its declared id. Always `None` for `ID_UNSET`.
    pub fn adaptation_set_by_id(&self, id: i32) -> Option<&AdaptationSet> {
        self.adaptation_sets
            .iter()
            .find(|set| set.has_id() && set.id() == id)
    }
}
