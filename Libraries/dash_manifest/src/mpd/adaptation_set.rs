use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mpd::{Descriptor, Representation};
use crate::track::TrackType;

/// Value of [`AdaptationSet::id`] when the manifest did not declare one.
pub const ID_UNSET: i32 = -1;

/// A set of interchangeable encoded versions of one media content component.
///
/// An adaptation set is frozen when it is created. Its sequences live in shared,
/// non-resizable slices and are only handed out as `&[T]`, so nothing holding an
/// `AdaptationSet` (or a clone of it) can change what another holder observes.
/// Equality is structural over all six fields, sequences compared in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdaptationSet {
    id: i32,
    #[serde(rename = "type")]
    track_type: TrackType,
    representations: Arc<[Representation]>,
    accessibility_descriptors: Arc<[Descriptor]>,
    essential_properties: Arc<[Descriptor]>,
    supplemental_properties: Arc<[Descriptor]>,
}

impl AdaptationSet {
    /**
     * Creates an adaptation set from its fully parsed children.
     * A `Vec` is moved in without copying; a borrowed slice is cloned. Either way the
     * caller keeps no handle through which the stored sequences could be modified.
     * `id` is stored as given, see [`AdaptationSet::id`].
     */
    pub fn new(
        id: i32,
        track_type: TrackType,
        representations: impl Into<Arc<[Representation]>>,
        accessibility_descriptors: impl Into<Arc<[Descriptor]>>,
        essential_properties: impl Into<Arc<[Descriptor]>>,
        supplemental_properties: impl Into<Arc<[Descriptor]>>,
    ) -> Self {
        Self {
            id,
            track_type,
            representations: representations.into(),
            accessibility_descriptors: accessibility_descriptors.into(),
            essential_properties: essential_properties.into(),
            supplemental_properties: supplemental_properties.into(),
        }
    }

    /// Identifier unique within the containing period, or [`ID_UNSET`].
    ///
    /// Manifest ids are unsigned; values above `i32::MAX` are stored wrapped to
    /// negative numbers. Compare against [`ID_UNSET`] rather than testing for a
    /// negative value, and use [`AdaptationSet::manifest_id`] to recover the
    /// unsigned form.
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn has_id(&self) -> bool {
        self.id != ID_UNSET
    }

    /// The id as declared in the manifest, or `None` when unset.
    pub fn manifest_id(&self) -> Option<u32> {
        self.has_id().then_some(self.id as u32)
    }

    /// Stores an unsigned manifest id the way [`AdaptationSet::id`] expects it.
    pub fn id_from_manifest(manifest_id: u32) -> i32 {
        manifest_id as i32
    }

    pub fn track_type(&self) -> TrackType {
        self.track_type
    }

    /// Representations in manifest order.
    pub fn representations(&self) -> &[Representation] {
        &self.representations
    }

    pub fn accessibility_descriptors(&self) -> &[Descriptor] {
        &self.accessibility_descriptors
    }

    pub fn essential_properties(&self) -> &[Descriptor] {
        &self.essential_properties
    }

    pub fn supplemental_properties(&self) -> &[Descriptor] {
        &self.supplemental_properties
    }

    pub fn find_accessibility_descriptor(&self, scheme_id_uri: &str) -> Option<&Descriptor> {
        find_by_scheme(&self.accessibility_descriptors, scheme_id_uri)
    }

    pub fn find_essential_property(&self, scheme_id_uri: &str) -> Option<&Descriptor> {
        find_by_scheme(&self.essential_properties, scheme_id_uri)
    }

    pub fn find_supplemental_property(&self, scheme_id_uri: &str) -> Option<&Descriptor> {
        find_by_scheme(&self.supplemental_properties, scheme_id_uri)
    }
}

fn find_by_scheme<'a>(descriptors: &'a [Descriptor], scheme_id_uri: &str) -> Option<&'a Descriptor> {
    descriptors.iter().find(|d| d.matches_scheme(scheme_id_uri))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRICK_MODE: &str = "http://dashif.org/guidelines/trickmode";

    fn rep(id: &str, bandwidth: u64) -> Representation {
        Representation::new(id, bandwidth).mime_type("video/mp4")
    }

    fn sample() -> AdaptationSet {
        AdaptationSet::new(
            3,
            TrackType::Video,
            vec![rep("r1", 1_000_000), rep("r2", 3_000_000)],
            vec![],
            vec![Descriptor::new(TRICK_MODE).with_value("1")],
            vec![],
        )
    }

    #[test]
    fn exposes_fields_as_constructed() {
        let set = sample();

        assert_eq!(set.id(), 3);
        assert_eq!(set.track_type(), TrackType::Video);
        assert_eq!(set.representations(), &[rep("r1", 1_000_000), rep("r2", 3_000_000)]);
        assert!(set.accessibility_descriptors().is_empty());
        assert_eq!(set.essential_properties(), &[Descriptor::new(TRICK_MODE).with_value("1")]);
        assert!(set.supplemental_properties().is_empty());
    }

    #[test]
    fn caller_mutation_after_construction_is_not_observed() {
        let mut reps = vec![rep("r1", 1_000_000), rep("r2", 3_000_000)];
        let set = AdaptationSet::new(3, TrackType::Video, reps.as_slice(), vec![], vec![], vec![]);

        reps.push(rep("r3", 6_000_000));
        reps[0].bandwidth = 1;
        reps.reverse();

        assert_eq!(set.representations().len(), 2);
        assert_eq!(set.representations()[0], rep("r1", 1_000_000));
        assert_eq!(set.representations()[1], rep("r2", 3_000_000));
    }

    #[test]
    fn clones_share_contents() {
        let set = sample();
        let copy = set.clone();
        assert_eq!(set, copy);
        assert!(std::ptr::eq(set.representations(), copy.representations()));
    }

    #[test]
    fn unset_id_is_distinguished() {
        let unset = AdaptationSet::new(ID_UNSET, TrackType::Audio, vec![], vec![], vec![], vec![]);
        assert!(!unset.has_id());
        assert_eq!(unset.manifest_id(), None);

        let zero = AdaptationSet::new(0, TrackType::Audio, vec![], vec![], vec![], vec![]);
        assert!(zero.has_id());
        assert_eq!(zero.manifest_id(), Some(0));
    }

    #[test]
    fn large_manifest_ids_wrap_and_recover() {
        let stored = AdaptationSet::id_from_manifest(3_000_000_000);
        assert!(stored < 0);

        let set = AdaptationSet::new(stored, TrackType::Text, vec![], vec![], vec![], vec![]);
        assert!(set.has_id());
        assert_eq!(set.id(), stored);
        assert_eq!(set.manifest_id(), Some(3_000_000_000));
    }

    #[test]
    fn empty_sequences_are_present_and_empty() {
        let set = AdaptationSet::new(ID_UNSET, TrackType::Unknown, vec![], vec![], vec![], vec![]);
        assert!(set.representations().is_empty());
        assert!(set.accessibility_descriptors().is_empty());
        assert!(set.essential_properties().is_empty());
        assert!(set.supplemental_properties().is_empty());
    }

    #[test]
    fn changing_any_field_breaks_equality() {
        let base = sample();
        let variants = [
            AdaptationSet::new(4, TrackType::Video, base.representations(), vec![], base.essential_properties(), vec![]),
            AdaptationSet::new(3, TrackType::Audio, base.representations(), vec![], base.essential_properties(), vec![]),
            AdaptationSet::new(
                3,
                TrackType::Video,
                vec![rep("r2", 3_000_000), rep("r1", 1_000_000)],
                vec![],
                base.essential_properties(),
                vec![],
            ),
            AdaptationSet::new(
                3,
                TrackType::Video,
                base.representations(),
                vec![Descriptor::new("urn:tva:metadata:cs:AudioPurposeCS:2007").with_value("1")],
                base.essential_properties(),
                vec![],
            ),
            AdaptationSet::new(3, TrackType::Video, base.representations(), vec![], vec![], vec![]),
            AdaptationSet::new(
                3,
                TrackType::Video,
                base.representations(),
                vec![],
                base.essential_properties(),
                vec![Descriptor::new(TRICK_MODE).with_value("1")],
            ),
        ];

        assert_eq!(base, sample());
        for variant in &variants {
            assert_ne!(&base, variant);
        }
    }

    #[test]
    fn finds_first_descriptor_by_scheme() {
        let set = AdaptationSet::new(
            1,
            TrackType::Audio,
            vec![],
            vec![],
            vec![],
            vec![
                Descriptor::new("urn:mpeg:dash:adaptation-set-switching:2016").with_value("2"),
                Descriptor::new("urn:mpeg:dash:adaptation-set-switching:2016").with_value("3"),
            ],
        );

        let found = set.find_supplemental_property("urn:mpeg:dash:adaptation-set-switching:2016");
        assert_eq!(found.and_then(|d| d.value.as_deref()), Some("2"));
        assert!(set.find_essential_property(TRICK_MODE).is_none());
        assert!(set.find_accessibility_descriptor(TRICK_MODE).is_none());
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdaptationSet>();
    }
}
