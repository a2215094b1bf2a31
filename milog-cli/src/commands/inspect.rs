use std::fmt::Display;
use std::path::Path;

use log::info;
use milog_core::{CoreError, CoreResult, Report, parse_log_file};

use crate::output::{print_heading, print_info, print_section};

/// Execute the inspect command: parse the log and print the parsed
/// track summary plus every derived classification value.
pub fn execute_inspect(log_file: &Path) -> CoreResult<()> {
    print_heading("MediaInfo Log Inspection");
    print_info("Log file", log_file.display());

    info!("Parsing MediaInfo log {}", log_file.display());
    let reports = parse_log_file(log_file)?;

    if reports.is_empty() {
        return Err(CoreError::NoReportFound);
    }

    for (index, report) in reports.iter().enumerate() {
        print_report(index + 1, report);
    }

    Ok(())
}

fn print_report(number: usize, report: &Report) {
    print_section(&format!("Report #{number}"));

    print_query("Filename", report.filename());
    print_query("Container", report.container());
    print_info("Video Tracks", report.video_tracks().len());
    print_info("Audio Tracks", report.audio_tracks().len());
    print_info("Subtitle Tracks", report.subtitle_tracks().len());
    print_info("Chapter Menu", if report.menu().is_some() { "yes" } else { "no" });

    print_query("Video Codec", report.primary_video_codec());
    print_query("Bit Depth", report.primary_video_bit_depth());
    print_query(
        "Interlaced",
        report
            .is_primary_video_interlaced()
            .map(|interlaced| if interlaced { "yes" } else { "no" }),
    );

    print_query("Audio Codec", report.primary_audio_codec());
    print_query(
        "Channel Layout",
        report
            .primary_audio_channels()
            .map(|layout| layout.unwrap_or("not mapped")),
    );
    print_query("Audio Languages", report.audio_languages().map(join_languages));
    print_query(
        "Subtitle Languages",
        report.subtitle_languages().map(join_languages),
    );
}

/// A failed derivation only loses its own line; the rest of the
/// report still prints.
fn print_query<T: Display>(label: &str, result: CoreResult<T>) {
    match result {
        Ok(value) => print_info(label, value),
        Err(e) => print_info(label, format!("n/a ({e})")),
    }
}

fn join_languages(languages: Vec<String>) -> String {
    if languages.is_empty() {
        "none tagged".to_string()
    } else {
        languages.join(", ")
    }
}
