//! Compares the adaptation sets of two period snapshots, e.g. across a manifest refresh.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::mpd::{AdaptationSet, Period};

/// How a single adaptation set differs between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdaptationSetChange<'a> {
    Added(&'a AdaptationSet),
    Removed(&'a AdaptationSet),
    Changed {
        old: &'a AdaptationSet,
        new: &'a AdaptationSet,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PeriodDiff<'a> {
    pub changes: Vec<AdaptationSetChange<'a>>,
}

impl PeriodDiff<'_> {
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/**
 * Classify every adaptation set of `old` and `new`.
 * Sets with an id are paired by id, sets without one are paired by their position
 * among the id-less sets. Paired sets that are structurally equal are omitted.
 * Changes and removals come first in `old` order, followed by additions in `new` order.
 */
pub fn diff_periods<'a>(old: &'a Period, new: &'a Period) -> PeriodDiff<'a> {
    let new_by_id: HashMap<i32, &AdaptationSet> = new
        .adaptation_sets()
        .iter()
        .filter(|set| set.has_id())
        .map(|set| (set.id(), set))
        .collect();
    let new_unset: Vec<&AdaptationSet> = new
        .adaptation_sets()
        .iter()
        .filter(|set| !set.has_id())
        .collect();

    let mut changes = Vec::new();
    let mut matched_ids = HashSet::new();
    let mut unset_position = 0;

    for old_set in old.adaptation_sets() {
        let counterpart = if old_set.has_id() {
            new_by_id.get(&old_set.id()).copied()
        } else {
            let found = new_unset.get(unset_position).copied();
            unset_position += 1;
            found
        };

        match counterpart {
            Some(new_set) => {
                if new_set.has_id() {
                    matched_ids.insert(new_set.id());
                }
                if old_set != new_set {
                    changes.push(AdaptationSetChange::Changed { old: old_set, new: new_set });
                }
            }
            None => changes.push(AdaptationSetChange::Removed(old_set)),
        }
    }

    let mut unset_index = 0;
    for new_set in new.adaptation_sets() {
        if new_set.has_id() {
            if !matched_ids.contains(&new_set.id()) {
                changes.push(AdaptationSetChange::Added(new_set));
            }
        } else {
            // id-less sets past the last paired position are new
            if unset_index >= unset_position {
                changes.push(AdaptationSetChange::Added(new_set));
            }
            unset_index += 1;
        }
    }

    debug!(
        "Period diff {:?} -> {:?}: {} of {} adaptation sets changed",
        old.id(),
        new.id(),
        changes.len(),
        new.adaptation_sets().len()
    );

    PeriodDiff { changes }
}
