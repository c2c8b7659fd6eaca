//! DASH manifest data structures (periods, adaptation sets and their children).
//! These represent the parsed result of an MPD; producing them from XML is left to the caller.

pub mod adaptation_set;
pub mod builder;
pub mod period;

use serde::{Deserialize, Serialize};

pub use adaptation_set::{AdaptationSet, ID_UNSET};
pub use builder::AdaptationSetBuilder;
pub use period::Period;

/// A `(schemeIdUri, value, id)` annotation such as `Accessibility`,
/// `EssentialProperty` or `SupplementalProperty`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descriptor {
    /// Identifies the scheme the value belongs to (e.g. "urn:mpeg:dash:role:2011").
    pub scheme_id_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Descriptor {
    pub fn new(scheme_id_uri: impl Into<String>) -> Self {
        Self {
            scheme_id_uri: scheme_id_uri.into(),
            value: None,
            id: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Scheme URIs are compared case-sensitively, as they appear in the manifest.
    pub fn matches_scheme(&self, scheme_id_uri: &str) -> bool {
        self.scheme_id_uri == scheme_id_uri
    }
}

/// A single encoded rendition within an adaptation set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Representation {
    /// Identifier of the representation, unique within its period.
    pub id: String,
    /// Average bandwidth in bits per second (bps).
    pub bandwidth: u64,
    /// MIME type of the media (e.g., "video/mp4").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// RFC 6381 codec string (e.g., "avc1.42E01E").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codecs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Frame rate as written in the manifest, either "25" or a ratio such as "30000/1001".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_sampling_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_channels: Option<u32>,
    /// BCP 47 language tag, inherited from the adaptation set when not declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Representation {
    pub fn new(id: impl Into<String>, bandwidth: u64) -> Self {
        Self {
            id: id.into(),
            bandwidth,
            mime_type: None,
            codecs: None,
            width: None,
            height: None,
            frame_rate: None,
            audio_sampling_rate: None,
            audio_channels: None,
            language: None,
        }
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn codecs(mut self, codecs: impl Into<String>) -> Self {
        self.codecs = Some(codecs.into());
        self
    }

    pub fn resolution(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn frame_rate(mut self, frame_rate: impl Into<String>) -> Self {
        self.frame_rate = Some(frame_rate.into());
        self
    }

    pub fn audio(mut self, sampling_rate: u32, channels: u32) -> Self {
        self.audio_sampling_rate = Some(sampling_rate);
        self.audio_channels = Some(channels);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
