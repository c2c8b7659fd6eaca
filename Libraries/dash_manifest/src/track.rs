//! Track-type taxonomy shared by adaptation sets and their consumers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// Raw values at or above this are application-defined track types.
pub const CUSTOM_TRACK_TYPE_BASE: i32 = 10000;

/// An application-defined track type. Only values at or above
/// [`CUSTOM_TRACK_TYPE_BASE`] can be constructed or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct CustomTrackType(i32);

impl CustomTrackType {
    pub fn new(value: i32) -> Result<Self, ManifestError> {
        if value >= CUSTOM_TRACK_TYPE_BASE {
            Ok(Self(value))
        } else {
            Err(ManifestError::InvalidTrackType(value))
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for CustomTrackType {
    type Error = ManifestError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomTrackType> for i32 {
    fn from(custom: CustomTrackType) -> Self {
        custom.0
    }
}

/// The kind of media an adaptation set carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackType {
    /// No track.
    None,
    /// A track whose type could not be determined.
    Unknown,
    /// The default track selection group.
    Default,
    Audio,
    Video,
    Text,
    Image,
    Metadata,
    CameraMotion,
    /// Application-defined type, always `>= CUSTOM_TRACK_TYPE_BASE`.
    Custom(CustomTrackType),
}

impl TrackType {
    /// Returns the conventional integer value of this track type.
    pub fn raw(self) -> i32 {
        match self {
            TrackType::None => -2,
            TrackType::Unknown => -1,
            TrackType::Default => 0,
            TrackType::Audio => 1,
            TrackType::Video => 2,
            TrackType::Text => 3,
            TrackType::Image => 4,
            TrackType::Metadata => 5,
            TrackType::CameraMotion => 6,
            TrackType::Custom(custom) => custom.value(),
        }
    }

    /**
     * Maps the `contentType` attribute of an adaptation set to a track type.
     * Unrecognised values map to `Unknown`.
     */
    pub fn from_content_type(content_type: &str) -> Self {
        match content_type.trim().to_ascii_lowercase().as_str() {
            "audio" => TrackType::Audio,
            "video" => TrackType::Video,
            "text" => TrackType::Text,
            "image" => TrackType::Image,
            _ => TrackType::Unknown,
        }
    }

    /**
     * Infers the track type from a MIME type such as `video/mp4`.
     * Subtitle containers carried as `application` types are treated as text.
     */
    pub fn from_mime_type(mime_type: &str) -> Self {
        let mime = mime_type.trim().to_ascii_lowercase();
        let top_level = mime.split('/').next().unwrap_or_default();
        match top_level {
            "audio" => TrackType::Audio,
            "video" => TrackType::Video,
            "text" => TrackType::Text,
            "image" => TrackType::Image,
            "application" if is_text_application_mime(&mime) => TrackType::Text,
            _ => TrackType::Unknown,
        }
    }

    pub fn is_custom(self) -> bool {
        matches!(self, TrackType::Custom(_))
    }
}

fn is_text_application_mime(mime: &str) -> bool {
    matches!(
        mime,
        "application/ttml+xml" | "application/mp4" | "application/x-subrip" | "application/cea-608"
    )
}

impl TryFrom<i32> for TrackType {
    type Error = ManifestError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -2 => Ok(TrackType::None),
            -1 => Ok(TrackType::Unknown),
            0 => Ok(TrackType::Default),
            1 => Ok(TrackType::Audio),
            2 => Ok(TrackType::Video),
            3 => Ok(TrackType::Text),
            4 => Ok(TrackType::Image),
            5 => Ok(TrackType::Metadata),
            6 => Ok(TrackType::CameraMotion),
            v => CustomTrackType::new(v).map(TrackType::Custom),
        }
    }
}

impl From<TrackType> for i32 {
    fn from(track_type: TrackType) -> Self {
        track_type.raw()
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackType::None => write!(f, "none"),
            TrackType::Unknown => write!(f, "unknown"),
            TrackType::Default => write!(f, "default"),
            TrackType::Audio => write!(f, "audio"),
            TrackType::Video => write!(f, "video"),
            TrackType::Text => write!(f, "text"),
            TrackType::Image => write!(f, "image"),
            TrackType::Metadata => write!(f, "metadata"),
            TrackType::CameraMotion => write!(f, "camera_motion"),
            TrackType::Custom(custom) => write!(f, "custom({})", custom.value()),
        }
    }
}
