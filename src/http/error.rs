use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Please enter a prompt.")]
    EmptyPrompt,

    #[error("No Gemini API key configured. Set GEMINI_API_KEY and try again.")]
    MissingApiKey,

    #[error("Failed to generate AI playlist. Please check your API key and try again. ({0})")]
    Request(#[from] reqwest::Error),

    #[error("Failed to generate AI playlist: the service answered with status {0}.")]
    Status(u16),

    #[error("Failed to generate AI playlist: unexpected response ({0}).")]
    Malformed(String),

    #[error("No playable songs are available to build a playlist from.")]
    NoPlayableSources,
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::Malformed(err.to_string())
    }
}
