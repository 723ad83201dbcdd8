use std::io;

#[derive(Debug)]
pub enum SpeechError {
    Io(io::Error),
    EmptyInput,
    EmptyDeviceName,
    MissingMarker(String),
    Xml(String),
}

impl From<io::Error> for SpeechError {
    fn from(err: io::Error) -> Self {
        SpeechError::Io(err)
    }
}

impl From<quick_xml::Error> for SpeechError {
    fn from(err: quick_xml::Error) -> Self {
        SpeechError::Xml(err.to_string())
    }
}

impl std::fmt::Display for SpeechError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeechError::Io(err) => write!(f, "I/O error: {}", err),
            SpeechError::EmptyInput => write!(f, "cannot hash an empty string"),
            SpeechError::EmptyDeviceName => write!(f, "DLC device name cannot be empty"),
            SpeechError::MissingMarker(name) => {
                write!(f, "track name '{}' has no trim marker", name)
            }
            SpeechError::Xml(err) => write!(f, "XML error: {}", err),
        }
    }
}

impl std::error::Error for SpeechError {}
