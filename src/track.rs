use std::sync::LazyLock;

use regex::Regex;

use crate::error::SpeechError;

/// Brace-delimited track definitions: `WaveTrack <identifier> { ... }`.
static WAVE_TRACK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"WaveTrack\s+(\w+)\s*\{[\s\S]*?\}").unwrap());

/// Scan file content for WaveTrack blocks and return the canonical track
/// names in match order.
///
/// The canonical name is the identifier truncated at the last occurrence
/// of `marker` (take numbering in .oac files suffixes every identifier,
/// e.g. `foo_bar_01` canonicalizes to `foo_bar`). An identifier without
/// the marker is an error for the whole file.
pub fn extract_track_names(content: &str, marker: &str) -> Result<Vec<String>, SpeechError> {
    let mut names = Vec::new();
    for captures in WAVE_TRACK_REGEX.captures_iter(content) {
        let identifier = &captures[1];
        let cut = identifier
            .rfind(marker)
            .ok_or_else(|| SpeechError::MissingMarker(identifier.to_string()))?;
        names.push(identifier[..cut].to_string());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block() {
        let content = "WaveTrack foo_bar_01 {\n  Wave hello.wav\n}\n";
        let names = extract_track_names(content, "_01").unwrap();
        assert_eq!(names, vec!["foo_bar"]);
    }

    #[test]
    fn test_match_order_preserved() {
        let content = "WaveTrack zulu_01 { } WaveTrack alpha_01 { }";
        let names = extract_track_names(content, "_01").unwrap();
        assert_eq!(names, vec!["zulu", "alpha"]);
    }

    #[test]
    fn test_marker_trimmed_at_last_occurrence() {
        let content = "WaveTrack clip_01_extra_01 { }";
        let names = extract_track_names(content, "_01").unwrap();
        assert_eq!(names, vec!["clip_01_extra"]);
    }

    #[test]
    fn test_no_blocks() {
        assert!(extract_track_names("nothing here", "_01").unwrap().is_empty());
    }

    #[test]
    fn test_missing_marker_is_error() {
        let content = "WaveTrack unnumbered { }";
        match extract_track_names(content, "_01") {
            Err(SpeechError::MissingMarker(name)) => assert_eq!(name, "unnumbered"),
            other => panic!("expected MissingMarker, got {:?}", other),
        }
    }

    #[test]
    fn test_multiline_body() {
        let content = "WaveTrack long_clip_01 {\n  Wave a.wav\n  Wave b.wav\n}";
        let names = extract_track_names(content, "_01").unwrap();
        assert_eq!(names, vec!["long_clip"]);
    }
}
