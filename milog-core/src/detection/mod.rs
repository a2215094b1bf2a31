//! Classification rules over parsed reports.
//!
//! This module contains the read-only queries that turn raw
//! vendor-specific report fields into normalized values: container
//! and filename extraction here, codec/channel/language rules in the
//! [`audio`] and [`video`] submodules.
//!
//! Every rule follows the same policy: an empty track collection is a
//! [`CoreError::NoTrack`] failure, an absent required field is
//! [`CoreError::MissingField`], and a present-but-unclassifiable
//! value is [`CoreError::UnrecognizedValue`]. Rules never guess.

pub mod audio;
pub mod video;

// Re-export the classification result types
pub use audio::AudioCodec;
pub use video::VideoCodec;

use crate::error::{CoreError, CoreResult, TrackType};
use crate::fields::FieldMap;
use crate::report::Report;

const COMPLETE_NAME: &str = "Complete name";

impl Report {
    /// Filename from the General section, with any path prefix up to
    /// the last `\` or `/` stripped.
    pub fn filename(&self) -> CoreResult<&str> {
        let complete_name = self
            .general()
            .get(COMPLETE_NAME)
            .ok_or_else(|| CoreError::missing(COMPLETE_NAME))?;

        let name = complete_name
            .rsplit(['\\', '/'])
            .next()
            .unwrap_or_default();
        if name.is_empty() {
            return Err(CoreError::unrecognized(COMPLETE_NAME, complete_name));
        }
        Ok(name)
    }

    /// Container inferred from the filename extension, uppercased.
    pub fn container(&self) -> CoreResult<String> {
        let complete_name = self
            .general()
            .get(COMPLETE_NAME)
            .ok_or_else(|| CoreError::missing(COMPLETE_NAME))?;

        match complete_name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => Ok(ext.to_uppercase()),
            _ => Err(CoreError::unrecognized(COMPLETE_NAME, complete_name)),
        }
    }

    /// Distinct `Language` values across all audio tracks, in
    /// first-seen order. Tracks without the field contribute nothing;
    /// an empty vec is not an error, zero audio tracks is.
    pub fn audio_languages(&self) -> CoreResult<Vec<String>> {
        collect_languages(self.audio_tracks(), TrackType::Audio)
    }

    /// Distinct `Language` values across all subtitle tracks, with
    /// the same policy as [`Report::audio_languages`].
    pub fn subtitle_languages(&self) -> CoreResult<Vec<String>> {
        collect_languages(self.subtitle_tracks(), TrackType::Subtitle)
    }
}

fn collect_languages(tracks: &[FieldMap], kind: TrackType) -> CoreResult<Vec<String>> {
    if tracks.is_empty() {
        return Err(CoreError::NoTrack(kind));
    }

    let mut languages: Vec<String> = Vec::new();
    for track in tracks {
        if let Some(language) = track.get("Language") {
            if !languages.iter().any(|l| l == language) {
                languages.push(language.to_string());
            }
        }
    }
    Ok(languages)
}
