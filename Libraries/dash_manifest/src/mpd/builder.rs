use tracing::trace;

use crate::mpd::{AdaptationSet, Descriptor, Representation, ID_UNSET};
use crate::track::TrackType;

/// Collects the children of an adaptation set while a manifest is being read.
/// Nothing is shared until [`AdaptationSetBuilder::build`] freezes the result.
#[derive(Debug, Clone)]
pub struct AdaptationSetBuilder {
    pub id: i32,
    pub track_type: TrackType,
    pub representations: Vec<Representation>,
    pub accessibility_descriptors: Vec<Descriptor>,
    pub essential_properties: Vec<Descriptor>,
    pub supplemental_properties: Vec<Descriptor>,
}

impl Default for AdaptationSetBuilder {
    fn default() -> Self {
        Self::new(TrackType::Unknown)
    }
}

impl AdaptationSetBuilder {
    pub fn new(track_type: TrackType) -> Self {
        Self {
            id: ID_UNSET,
            track_type,
            representations: vec![],
            accessibility_descriptors: vec![],
            essential_properties: vec![],
            supplemental_properties: vec![],
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /**
     * Set the id from the unsigned value declared in the manifest.
     * Values above `i32::MAX` are stored wrapped, see `AdaptationSet::id`.
     */
    pub fn manifest_id(mut self, manifest_id: u32) -> Self {
        self.id = AdaptationSet::id_from_manifest(manifest_id);
        self
    }

    pub fn track_type(mut self, track_type: TrackType) -> Self {
        self.track_type = track_type;
        self
    }

    /**
     * Append a representation.
     * Representations keep the order in which they are added, which is the
     * order later used for default selection.
     */
    pub fn representation(mut self, representation: Representation) -> Self {
        self.representations.push(representation);
        self
    }

    pub fn accessibility_descriptor(mut self, descriptor: Descriptor) -> Self {
        self.accessibility_descriptors.push(descriptor);
        self
    }

    pub fn essential_property(mut self, descriptor: Descriptor) -> Self {
        self.essential_properties.push(descriptor);
        self
    }

    pub fn supplemental_property(mut self, descriptor: Descriptor) -> Self {
        self.supplemental_properties.push(descriptor);
        self
    }

    /// Freeze the collected children into an immutable [`AdaptationSet`].
    pub fn build(self) -> AdaptationSet {
        trace!(
            "Building adaptation set {} ({}) with {} representations",
            self.id,
            self.track_type,
            self.representations.len()
        );

        AdaptationSet::new(
            self.id,
            self.track_type,
            self.representations,
            self.accessibility_descriptors,
            self.essential_properties,
            self.supplemental_properties,
        )
    }
}
