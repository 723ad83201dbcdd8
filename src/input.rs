use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::SpeechError;

/// Source of operator-supplied names.
///
/// The driver asks for the DLC device name once, then for a speaker per
/// discovered track. Implementations decide where the answers come from;
/// the pipeline itself never touches stdin.
pub trait OperatorInput {
    fn device_name(&mut self) -> Result<String, SpeechError>;
    fn speaker_for(&mut self, track: &str) -> Result<String, SpeechError>;
}

/// Interactive implementation reading stdin line by line.
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        ConsoleInput
    }

    fn read_line(&self) -> Result<String, SpeechError> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorInput for ConsoleInput {
    fn device_name(&mut self) -> Result<String, SpeechError> {
        println!("Enter your DLC device name:");
        io::stdout().flush()?;
        self.read_line()
    }

    fn speaker_for(&mut self, track: &str) -> Result<String, SpeechError> {
        println!("WaveTrack found ({})", track);
        println!("Input Speaker: ");
        io::stdout().flush()?;
        self.read_line()
    }
}

/// Canned responses for tests and scripted runs: first answer is the
/// device name, the rest are speakers in prompt order.
pub struct QueuedInput {
    device: String,
    speakers: VecDeque<String>,
    /// Tracks the pipeline asked about, in prompt order.
    pub prompted: Vec<String>,
}

impl QueuedInput {
    pub fn new(device: &str, speakers: &[&str]) -> Self {
        Self {
            device: device.to_string(),
            speakers: speakers.iter().map(|s| s.to_string()).collect(),
            prompted: Vec::new(),
        }
    }
}

impl OperatorInput for QueuedInput {
    fn device_name(&mut self) -> Result<String, SpeechError> {
        Ok(self.device.clone())
    }

    fn speaker_for(&mut self, track: &str) -> Result<String, SpeechError> {
        self.prompted.push(track.to_string());
        self.speakers.pop_front().ok_or(SpeechError::EmptyInput)
    }
}
