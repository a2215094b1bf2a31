//! Video codec, bit depth, and scan type classification.

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::detection::audio::first_track;
use crate::error::{CoreError, CoreResult, TrackType};
use crate::report::Report;

/// Normalized video codec names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCodec {
    H264,
    H265,
    Xvid,
    Divx,
    Mpeg,
    Mpeg2,
    Vc1,
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoCodec::H264 => write!(f, "H.264"),
            VideoCodec::H265 => write!(f, "H.265"),
            VideoCodec::Xvid => write!(f, "XviD"),
            VideoCodec::Divx => write!(f, "DivX"),
            VideoCodec::Mpeg => write!(f, "MPEG"),
            VideoCodec::Mpeg2 => write!(f, "MPEG2"),
            VideoCodec::Vc1 => write!(f, "VC-1"),
        }
    }
}

/// Vendor signatures for MPEG-4 Visual encoders, evaluated in order:
/// the first (field, substring) row whose field contains the
/// substring (case-insensitive) names the codec. Kept as a table so
/// future encoder signatures are one row, not another nested branch.
pub const VENDOR_SIGNATURES: &[(&str, &str, VideoCodec)] = &[
    ("Writing library", "xvid", VideoCodec::Xvid),
    ("Writing library", "divx", VideoCodec::Divx),
    ("Codec ID", "xvid", VideoCodec::Xvid),
    ("Codec ID", "divx", VideoCodec::Divx),
    ("Codec ID/Hint", "xvid", VideoCodec::Xvid),
    ("Codec ID/Hint", "divx", VideoCodec::Divx),
];

static FIRST_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)").unwrap());

impl Report {
    /// Normalized codec of the first video track. MPEG-4 Visual is
    /// disambiguated to XviD/DivX via [`VENDOR_SIGNATURES`]; MPEG
    /// Video via its `Format version` field.
    pub fn primary_video_codec(&self) -> CoreResult<VideoCodec> {
        let video = first_track(self.video_tracks(), TrackType::Video)?;

        let format = video
            .get("Format")
            .ok_or_else(|| CoreError::missing("Format"))?;

        let codec = match format {
            "AVC" => Some(VideoCodec::H264),
            "HEVC" | "hvc1" | "hev1" => Some(VideoCodec::H265),
            "MPEG-4 Visual" => VENDOR_SIGNATURES.iter().find_map(|(field, needle, codec)| {
                video
                    .get(field)
                    .filter(|value| value.to_lowercase().contains(needle))
                    .map(|_| *codec)
            }),
            "MPEG Video" => match video.get("Format version") {
                Some("Version 1") => Some(VideoCodec::Mpeg),
                Some("Version 2") => Some(VideoCodec::Mpeg2),
                _ => None,
            },
            "VC-1" => Some(VideoCodec::Vc1),
            _ => None,
        };

        match codec {
            Some(codec) => {
                debug!("classified video format {format:?} as {codec}");
                Ok(codec)
            }
            None => Err(CoreError::unrecognized("Format", format)),
        }
    }

    /// Bit depth of the first video track, from the first integer in
    /// its `Bit depth` field (e.g. `"8 bits"` -> 8).
    pub fn primary_video_bit_depth(&self) -> CoreResult<u32> {
        let video = first_track(self.video_tracks(), TrackType::Video)?;

        let bit_depth = video
            .get("Bit depth")
            .ok_or_else(|| CoreError::missing("Bit depth"))?;

        FIRST_INT
            .captures(bit_depth)
            .and_then(|caps| caps[1].parse().ok())
            .ok_or_else(|| CoreError::unrecognized("Bit depth", bit_depth))
    }

    /// Whether the first video track is interlaced: `Scan type` of
    /// `Interlaced` or `MBAFF`, or a `Scan type, store method` of
    /// `Interleaved fields`. Absent fields mean progressive.
    pub fn is_primary_video_interlaced(&self) -> CoreResult<bool> {
        let video = first_track(self.video_tracks(), TrackType::Video)?;

        let scan_type = video.get("Scan type");
        let store_method = video.get("Scan type, store method");

        Ok(scan_type == Some("Interlaced")
            || scan_type == Some("MBAFF")
            || store_method == Some("Interleaved fields"))
    }
}
