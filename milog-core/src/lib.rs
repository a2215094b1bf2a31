//! Core library for parsing and classifying MediaInfo text logs.
//!
//! This crate turns the human-readable key/value dumps that the
//! MediaInfo tool produces into structured [`Report`]s, then derives
//! normalized facts from them: codec names, channel layouts, track
//! languages, bit depth, and interlacing.
//!
//! ## Usage Example
//!
//! ```rust
//! let text = "\
//! General
//! Complete name                  : C:\\movies\\Film.Title.2020.mkv
//!
//! Video
//! Format                         : AVC
//!
//! Audio
//! Format                         : DTS
//! Format profile                 : MA / Core
//! ";
//!
//! let reports = milog_core::parse_all(text).unwrap();
//! let report = &reports[0];
//! assert_eq!(report.filename().unwrap(), "Film.Title.2020.mkv");
//! assert_eq!(report.container().unwrap(), "MKV");
//! assert_eq!(report.primary_audio_codec().unwrap().to_string(), "DTS-HD MA");
//! ```

pub mod detection;
pub mod error;
pub mod fields;
pub mod report;

// Re-exports for public API
pub use detection::{AudioCodec, VideoCodec};
pub use error::{CoreError, CoreResult, TrackType};
pub use fields::FieldMap;
pub use report::{Report, parse_all, parse_log_file};
