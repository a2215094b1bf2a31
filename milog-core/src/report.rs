//! MediaInfo text log parsing.
//!
//! Responsibilities:
//! - Split a saved log containing one or more concatenated reports
//!   into per-report text chunks
//! - Parse one report's lines into typed, ordered sections
//!
//! A report is line-oriented: a section header (`General`, `Video`,
//! `Audio`, `Text`, `Menu`, optionally tagged `#N`) opens a section,
//! and the `Field name                : value` lines that follow fill
//! it until a blank line or the next header.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fields::FieldMap;

/// Report boundary: a line that is exactly a `General` header,
/// case-sensitive, optionally tagged (e.g. `General #1`).
static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^General[^\S\r\n]*(?:#\d+)*(?:\r?\n|\z)").unwrap());

/// Section header line, matched against an already-trimmed line.
static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(general|video|audio|text|menu)\s*(?:#(\d+))?$").unwrap());

/// Separator between field name and field value.
static FIELD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+:\s*").unwrap());

/// Section types a report can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    General,
    Video,
    Audio,
    Text,
    Menu,
}

impl SectionKind {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "general" => Some(SectionKind::General),
            "video" => Some(SectionKind::Video),
            "audio" => Some(SectionKind::Audio),
            "text" => Some(SectionKind::Text),
            "menu" => Some(SectionKind::Menu),
            _ => None,
        }
    }
}

/// Parsed representation of one media file's MediaInfo report.
///
/// Constructed once from text and immutable afterwards; every
/// classification rule is a read-only query against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    general: FieldMap,
    video_tracks: Vec<FieldMap>,
    audio_tracks: Vec<FieldMap>,
    subtitle_tracks: Vec<FieldMap>,
    menu: Option<FieldMap>,
}

impl Report {
    /// Parses a single report's text.
    ///
    /// Malformed body lines are skipped silently; the only fatal
    /// condition is the absence of a General section, which yields
    /// [`CoreError::NoReportFound`].
    pub fn from_text(text: &str) -> CoreResult<Self> {
        let mut general: Option<FieldMap> = None;
        let mut video_tracks = Vec::new();
        let mut audio_tracks = Vec::new();
        let mut subtitle_tracks = Vec::new();
        let mut menu: Option<FieldMap> = None;

        let mut current: Option<(SectionKind, FieldMap)> = None;

        let mut commit = |section: Option<(SectionKind, FieldMap)>| {
            if let Some((kind, fields)) = section {
                match kind {
                    SectionKind::General => general = Some(fields),
                    SectionKind::Video => video_tracks.push(fields),
                    SectionKind::Audio => audio_tracks.push(fields),
                    SectionKind::Text => subtitle_tracks.push(fields),
                    // Duplicate Menu sections overwrite; last one wins.
                    SectionKind::Menu => menu = Some(fields),
                }
            }
        };

        for line in text.lines() {
            let line = line.trim();

            if line.is_empty() {
                commit(current.take());
                continue;
            }

            if let Some(caps) = SECTION_HEADER.captures(line) {
                commit(current.take());
                // The #N tag disambiguates same-type sections in the
                // source log but never affects grouping here.
                let kind = SectionKind::from_name(&caps[1]).unwrap_or(SectionKind::General);
                trace!("opening {:?} section (tag: {:?})", kind, caps.get(2).map(|m| m.as_str()));
                current = Some((kind, FieldMap::new()));
            } else if let Some((_, fields)) = current.as_mut() {
                // Only the first separator splits; anything after it
                // stays in the value. Lines without one are skipped.
                let mut parts = FIELD_SEPARATOR.splitn(line, 2);
                let name = parts.next().unwrap_or_default();
                if let Some(value) = parts.next() {
                    fields.insert(name, value);
                }
            }
        }
        commit(current.take());

        let general = general.ok_or(CoreError::NoReportFound)?;

        Ok(Report {
            general,
            video_tracks,
            audio_tracks,
            subtitle_tracks,
            menu,
        })
    }

    /// General section fields. Always present.
    #[must_use]
    pub fn general(&self) -> &FieldMap {
        &self.general
    }

    /// Video sections in order of appearance.
    #[must_use]
    pub fn video_tracks(&self) -> &[FieldMap] {
        &self.video_tracks
    }

    /// Audio sections in order of appearance.
    #[must_use]
    pub fn audio_tracks(&self) -> &[FieldMap] {
        &self.audio_tracks
    }

    /// Text sections in order of appearance.
    #[must_use]
    pub fn subtitle_tracks(&self) -> &[FieldMap] {
        &self.subtitle_tracks
    }

    /// Chapter menu fields, if a Menu section was present.
    #[must_use]
    pub fn menu(&self) -> Option<&FieldMap> {
        self.menu.as_ref()
    }
}

/// Splits a log into per-report chunks, each re-prefixed with a
/// `General` header so it parses as a standalone report.
fn split_reports(text: &str) -> Vec<String> {
    BOUNDARY
        .split(text)
        .skip(1)
        .map(|chunk| format!("General\n{chunk}"))
        .collect()
}

/// Parses every report embedded in a MediaInfo text log.
///
/// Text before the first `General` header is discarded. Zero headers
/// yield an empty vec, not an error. Parsing is fail-fast: the first
/// chunk that fails to parse fails the whole call.
pub fn parse_all(text: &str) -> CoreResult<Vec<Report>> {
    let chunks = split_reports(text);
    debug!("found {} report(s) in log text", chunks.len());
    chunks.iter().map(|chunk| Report::from_text(chunk)).collect()
}

/// Reads a saved MediaInfo text log and parses every report in it.
pub fn parse_log_file<P: AsRef<Path>>(path: P) -> CoreResult<Vec<Report>> {
    let path = path.as_ref();
    debug!("reading MediaInfo log from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_all(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_reports_prefixes_general() {
        let chunks = split_reports("General\nComplete name : a.mkv\nGeneral #2\nComplete name : b.mkv\n");
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].starts_with("General\n"));
        assert!(chunks[1].contains("b.mkv"));
    }

    #[test]
    fn test_split_reports_discards_leading_garbage() {
        let chunks = split_reports("created with MediaInfo v20.08\nGeneral\nFormat : Matroska\n");
        assert_eq!(chunks.len(), 1);
        assert!(!chunks[0].contains("v20.08"));
    }

    #[test]
    fn test_split_reports_boundary_is_case_sensitive() {
        assert!(split_reports("GENERAL\nFormat : Matroska\n").is_empty());
    }

    #[test]
    fn test_split_reports_none_found() {
        assert!(split_reports("no reports here\n").is_empty());
    }
}
