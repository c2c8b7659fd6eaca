pub mod diff;
pub mod error;
pub mod mpd;
pub mod track;

pub use diff::{diff_periods, AdaptationSetChange, PeriodDiff};
pub use error::ManifestError;
pub use mpd::{AdaptationSet, AdaptationSetBuilder, Descriptor, Period, Representation, ID_UNSET};
pub use track::{CustomTrackType, TrackType, CUSTOM_TRACK_TYPE_BASE};
