use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// A newer source replaced the one this call was waiting on.
    #[error("Playback aborted: source was replaced")]
    Aborted,

    #[error("No source loaded")]
    NoSource,

    #[error("Source is not ready yet")]
    NotReady,

    #[error("Stream error: {0}")]
    StreamError(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("Seek error: {0}")]
    Seek(String),
}

impl TransportError {
    pub fn is_superseded(&self) -> bool {
        matches!(self, TransportError::Aborted)
    }
}
