// milog-core/tests/detection_tests.rs
//
// End-to-end checks for the classification queries, built from small
// handwritten logs rather than fixture files.

use milog_core::{CoreError, Report, TrackType};

fn parse(text: &str) -> Report {
    Report::from_text(text).unwrap()
}

#[test]
fn test_filename_and_container_from_windows_path() {
    let report = parse("General\nComplete name : C:\\movies\\Film.Title.2020.mkv\n");

    assert_eq!(report.filename().unwrap(), "Film.Title.2020.mkv");
    assert_eq!(report.container().unwrap(), "MKV");
}

#[test]
fn test_filename_from_unix_path() {
    let report = parse("General\nComplete name : /srv/media/show.s01e01.mp4\n");

    assert_eq!(report.filename().unwrap(), "show.s01e01.mp4");
    assert_eq!(report.container().unwrap(), "MP4");
}

#[test]
fn test_filename_without_any_path_prefix() {
    let report = parse("General\nComplete name : bare.avi\n");
    assert_eq!(report.filename().unwrap(), "bare.avi");
}

#[test]
fn test_filename_missing_complete_name() {
    let report = parse("General\nFormat : Matroska\n");

    assert!(matches!(report.filename(), Err(CoreError::MissingField(_))));
    assert!(matches!(report.container(), Err(CoreError::MissingField(_))));
}

#[test]
fn test_container_requires_extension() {
    let report = parse("General\nComplete name : /srv/media/noextension\n");
    assert!(matches!(
        report.container(),
        Err(CoreError::UnrecognizedValue { .. })
    ));
}

#[test]
fn test_dts_hd_ma_from_format_profile() {
    let report = parse(
        "General\nFormat : Matroska\n\nAudio\nFormat : DTS\nFormat profile : MA / Core\n",
    );
    assert_eq!(report.primary_audio_codec().unwrap().to_string(), "DTS-HD MA");
}

#[test]
fn test_plain_dts_without_ma_profile() {
    let report = parse("General\nFormat : Matroska\n\nAudio\nFormat : DTS\n");
    assert_eq!(report.primary_audio_codec().unwrap().to_string(), "DTS");
}

#[test]
fn test_six_channels_is_5_1() {
    let report = parse("General\nFormat : Matroska\n\nAudio\nChannel(s) : 6 channels\n");
    assert_eq!(report.primary_audio_channels().unwrap(), Some("5.1"));
}

#[test]
fn test_channels_prefer_original_field() {
    let report = parse(
        "General\nFormat : Matroska\n\nAudio\nChannel(s) : 2 channels\nChannel(s)_Original : 8 channels\n",
    );
    assert_eq!(report.primary_audio_channels().unwrap(), Some("7.1"));
}

#[test]
fn test_no_audio_tracks_fails_every_audio_query() {
    let report = parse("General\nFormat : Matroska\n\nVideo\nFormat : AVC\n");

    assert!(matches!(
        report.primary_audio_codec(),
        Err(CoreError::NoTrack(TrackType::Audio))
    ));
    assert!(matches!(
        report.primary_audio_channels(),
        Err(CoreError::NoTrack(TrackType::Audio))
    ));
    assert!(matches!(
        report.audio_languages(),
        Err(CoreError::NoTrack(TrackType::Audio))
    ));
}

#[test]
fn test_audio_languages_deduplicated_in_order() {
    let report = parse(
        "\
General
Format : Matroska

Audio #1
Language : English

Audio #2
Language : French

Audio #3
Language : English
",
    );
    assert_eq!(report.audio_languages().unwrap(), vec!["English", "French"]);
}

#[test]
fn test_audio_languages_empty_when_untagged() {
    // Tracks exist but none carry a Language field: empty, not an error.
    let report = parse("General\nFormat : Matroska\n\nAudio\nFormat : AAC\n");
    assert_eq!(report.audio_languages().unwrap(), Vec::<String>::new());
}

#[test]
fn test_subtitle_languages() {
    let report = parse(
        "General\nFormat : Matroska\n\nText #1\nLanguage : Dutch\n\nText #2\nLanguage : English\n",
    );
    assert_eq!(
        report.subtitle_languages().unwrap(),
        vec!["Dutch", "English"]
    );

    let no_subs = parse("General\nFormat : Matroska\n");
    assert!(matches!(
        no_subs.subtitle_languages(),
        Err(CoreError::NoTrack(TrackType::Subtitle))
    ));
}

#[test]
fn test_xvid_from_writing_library() {
    let report = parse(
        "General\nFormat : Matroska\n\nVideo\nFormat : MPEG-4 Visual\nWriting library : XviD 1.2.1\n",
    );
    assert_eq!(report.primary_video_codec().unwrap().to_string(), "XviD");
}

#[test]
fn test_no_video_tracks_fails_every_video_query() {
    let report = parse("General\nFormat : Matroska\n\nAudio\nFormat : AAC\n");

    assert!(matches!(
        report.primary_video_codec(),
        Err(CoreError::NoTrack(TrackType::Video))
    ));
    assert!(matches!(
        report.primary_video_bit_depth(),
        Err(CoreError::NoTrack(TrackType::Video))
    ));
    assert!(matches!(
        report.is_primary_video_interlaced(),
        Err(CoreError::NoTrack(TrackType::Video))
    ));
}

#[test]
fn test_interlaced_scan_type() {
    let report = parse("General\nFormat : Matroska\n\nVideo\nScan type : Interlaced\n");
    assert!(report.is_primary_video_interlaced().unwrap());

    let progressive = parse("General\nFormat : Matroska\n\nVideo\nFormat : AVC\n");
    assert!(!progressive.is_primary_video_interlaced().unwrap());
}

#[test]
fn test_queries_only_consult_first_track() {
    // The second track's layout-mapped count must not leak into the
    // primary-track answer.
    let report = parse(
        "\
General
Format : Matroska

Audio #1
Format : AAC
Channel(s) : 7 channels

Audio #2
Format : DTS
Channel(s) : 6 channels
",
    );
    assert_eq!(report.primary_audio_codec().unwrap().to_string(), "AAC");
    assert_eq!(report.primary_audio_channels().unwrap(), None);
}

#[test]
fn test_derivation_failures_do_not_poison_the_report() {
    let report = parse("General\nComplete name : movie.mkv\n\nVideo\nFormat : AVC\n");

    assert!(report.primary_audio_codec().is_err());
    // The report stays fully usable after a failed query.
    assert_eq!(report.filename().unwrap(), "movie.mkv");
    assert_eq!(report.primary_video_codec().unwrap().to_string(), "H.264");
}
