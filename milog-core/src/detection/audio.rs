//! Audio codec and channel layout classification.

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{CoreError, CoreResult, TrackType};
use crate::fields::FieldMap;
use crate::report::Report;

/// Normalized audio codec names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCodec {
    Mp3,
    Mp2,
    TrueHd,
    Lpcm,
    Flac,
    DtsHdMa,
    Dts,
    Dd,
    Aac,
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioCodec::Mp3 => write!(f, "MP3"),
            AudioCodec::Mp2 => write!(f, "MP2"),
            AudioCodec::TrueHd => write!(f, "TrueHD"),
            AudioCodec::Lpcm => write!(f, "LPCM"),
            AudioCodec::Flac => write!(f, "FLAC"),
            AudioCodec::DtsHdMa => write!(f, "DTS-HD MA"),
            AudioCodec::Dts => write!(f, "DTS"),
            AudioCodec::Dd => write!(f, "DD"),
            AudioCodec::Aac => write!(f, "AAC"),
        }
    }
}

/// Channel count fields tried in order; vendor field naming drifts
/// across MediaInfo versions, so the first present field wins.
pub const CHANNEL_FIELDS: &[&str] = &["Channel(s)_Original", "Channel(s)", "Channel count"];

/// Channel count to layout name. Counts outside the table produce no
/// layout rather than an error.
pub const CHANNEL_LAYOUTS: &[(u32, &str)] = &[
    (1, "1.0"),
    (2, "2.0"),
    (3, "2.1"),
    (6, "5.1"),
    (8, "7.1"),
];

static LEADING_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)").unwrap());

impl Report {
    /// Normalized codec of the first audio track, derived from its
    /// `Format` and `Format profile` fields.
    pub fn primary_audio_codec(&self) -> CoreResult<AudioCodec> {
        let audio = first_track(self.audio_tracks(), TrackType::Audio)?;

        let format = audio
            .get("Format")
            .ok_or_else(|| CoreError::missing("Format"))?;
        let profile = audio.get("Format profile");

        let codec = match format {
            "MPEG Audio" if profile == Some("Layer 3") => Some(AudioCodec::Mp3),
            "MPEG Audio" if profile == Some("Layer 2") => Some(AudioCodec::Mp2),
            "PCM" => Some(AudioCodec::Lpcm),
            "FLAC" => Some(AudioCodec::Flac),
            "DTS" if profile == Some("MA / Core") => Some(AudioCodec::DtsHdMa),
            "DTS" => Some(AudioCodec::Dts),
            "AAC" => Some(AudioCodec::Aac),
            _ if format.contains("TrueHD") => Some(AudioCodec::TrueHd),
            _ if format.contains("AC-3") => Some(AudioCodec::Dd),
            _ => None,
        };

        match codec {
            Some(codec) => {
                debug!("classified audio format {format:?} as {codec}");
                Ok(codec)
            }
            None => Err(CoreError::unrecognized("Format", format)),
        }
    }

    /// Channel layout of the first audio track (`"5.1"`, `"2.0"`, ...),
    /// or `None` when the channel count maps to no known layout.
    pub fn primary_audio_channels(&self) -> CoreResult<Option<&'static str>> {
        let audio = first_track(self.audio_tracks(), TrackType::Audio)?;

        let channel_value = CHANNEL_FIELDS.iter().find_map(|field| audio.get(field));
        let count: u32 = channel_value
            .and_then(|value| LEADING_INT.captures(value))
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(0);

        Ok(CHANNEL_LAYOUTS
            .iter()
            .find(|(n, _)| *n == count)
            .map(|(_, layout)| *layout))
    }
}

pub(crate) fn first_track(tracks: &[FieldMap], kind: TrackType) -> CoreResult<&FieldMap> {
    tracks.first().ok_or(CoreError::NoTrack(kind))
}
