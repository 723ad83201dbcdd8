use std::fs;
use std::path::Path;

pub mod document;
pub mod error;
pub mod hash;
pub mod input;
pub mod track;

pub use document::{container_hash, container_path, ContainerLink, Dat4Document, DAT4_VERSION};
pub use error::SpeechError;
pub use hash::{CombinedHash, HashValue};
pub use input::{ConsoleInput, OperatorInput, QueuedInput};
pub use track::extract_track_names;

/// A track discovered in an input file together with its operator-assigned
/// speaker and the derived hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAssignment {
    pub track: String,
    pub speaker: String,
    pub combined: CombinedHash,
    pub speaker_hash: HashValue,
}

#[derive(Clone)]
pub struct RelGenerator {
    pub track_marker: String,
}

impl Default for RelGenerator {
    fn default() -> Self {
        Self {
            track_marker: "_01".to_string(),
        }
    }
}

impl RelGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track_marker(mut self, marker: &str) -> Self {
        self.track_marker = marker.to_string();
        self
    }

    /// Extract tracks from one file's content and assign speakers.
    ///
    /// Prompts happen in match order. Any failure (missing marker, empty
    /// speaker name) fails this file only; the caller decides whether the
    /// batch continues.
    pub fn process_content(
        &self,
        content: &str,
        input: &mut dyn OperatorInput,
    ) -> Result<Vec<TrackAssignment>, SpeechError> {
        let names = extract_track_names(content, &self.track_marker)?;

        let mut assignments = Vec::with_capacity(names.len());
        for track in names {
            let speaker = input.speaker_for(&track)?;
            let track_hash = HashValue::of(&track)?;
            let speaker_hash = HashValue::of(&speaker)?;
            assignments.push(TrackAssignment {
                combined: track_hash.combine(&speaker_hash),
                track,
                speaker,
                speaker_hash,
            });
        }
        Ok(assignments)
    }

    /// Read a file and process its content.
    pub fn process_file<P: AsRef<Path>>(
        &self,
        path: P,
        input: &mut dyn OperatorInput,
    ) -> Result<Vec<TrackAssignment>, SpeechError> {
        let content = fs::read_to_string(path)?;
        self.process_content(&content, input)
    }

    /// Assemble the descriptor from the processed batch.
    ///
    /// `file_stems` are the input files' base names in argument order;
    /// `assignments` carry the accumulated tracks across all files in
    /// discovery order.
    pub fn build_document(
        &self,
        device: &str,
        file_stems: &[String],
        assignments: &[TrackAssignment],
    ) -> Dat4Document {
        let container_paths = file_stems
            .iter()
            .map(|stem| container_path(device, stem))
            .collect();
        let combined_hashes = assignments
            .iter()
            .map(|a| a.combined.to_hex_lower())
            .collect();
        let speaker_hashes = assignments
            .iter()
            .map(|a| a.speaker_hash.to_hex_lower())
            .collect();
        let links = file_stems
            .iter()
            .enumerate()
            .map(|(index, stem)| ContainerLink {
                name: index.to_string(),
                container_hash: container_hash(device, stem),
            })
            .collect();

        Dat4Document::new(container_paths, combined_hashes, speaker_hashes, links)
    }

    /// Output file name for a device: `<device>_speech.dat4.rel.xml`.
    pub fn output_file_name(&self, device: &str) -> String {
        format!("{}_speech.dat4.rel.xml", device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_content_single_track() {
        let generator = RelGenerator::new();
        let mut input = QueuedInput::new("dlc_speech", &["Bob"]);

        let assignments = generator
            .process_content("WaveTrack hello_01 { Wave hello.wav }", &mut input)
            .unwrap();

        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].track, "hello");
        assert_eq!(assignments[0].speaker, "Bob");
        assert_eq!(assignments[0].combined.to_hex_lower(), "0f9487a2");
        assert_eq!(assignments[0].speaker_hash.to_hex_lower(), "c7699fb9");
    }

    #[test]
    fn test_no_tracks_no_prompts() {
        let generator = RelGenerator::new();
        let mut input = QueuedInput::new("dev", &[]);

        let assignments = generator
            .process_content("just a comment, no definitions", &mut input)
            .unwrap();

        assert!(assignments.is_empty());
        assert!(input.prompted.is_empty());
    }

    #[test]
    fn test_custom_marker() {
        let generator = RelGenerator::new().with_track_marker("_take");
        let mut input = QueuedInput::new("dev", &["Ann"]);

        let assignments = generator
            .process_content("WaveTrack intro_take { }", &mut input)
            .unwrap();

        assert_eq!(assignments[0].track, "intro");
    }

    #[test]
    fn test_build_document_layout() {
        let generator = RelGenerator::new();
        let mut input = QueuedInput::new("dlc_speech", &["Bob"]);
        let assignments = generator
            .process_content("WaveTrack hello_01 { }", &mut input)
            .unwrap();

        let doc = generator.build_document("dlc_speech", &["clip1".to_string()], &assignments);

        assert_eq!(doc.container_paths, vec!["DLC_SPEECH\\CLIP1"]);
        assert_eq!(doc.combined_hashes, vec!["0f9487a2"]);
        assert_eq!(doc.speaker_hashes, vec!["c7699fb9"]);
        assert_eq!(doc.links.len(), 1);
        assert_eq!(doc.links[0].name, "0");
        assert_eq!(doc.links[0].container_hash, "dlc_speech\\clip1");
    }

    #[test]
    fn test_output_file_name() {
        let generator = RelGenerator::new();
        assert_eq!(
            generator.output_file_name("dlc_speech"),
            "dlc_speech_speech.dat4.rel.xml"
        );
    }
}
