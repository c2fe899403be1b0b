pub mod error;
pub mod schema;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::catalog::generate::GENERATED_SONG_COUNT;
use error::GenerateError;
use schema::{
    Content, GenerateContentRequest, GenerateContentResponse, GeneratedPlaylist, GenerationConfig,
    Part, prompt_text, response_schema,
};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[async_trait]
pub trait PlaylistGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedPlaylist, GenerateError>;
}

pub struct ApiService {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl ApiService {
    /// Reads `GEMINI_API_KEY` (or `API_KEY`) and `GEMINI_MODEL` from the
    /// environment. A missing key only fails once a playlist is requested.
    pub fn new() -> color_eyre::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            warn!("no Gemini API key configured, playlist generation is disabled");
        }

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl PlaylistGenerator for ApiService {
    async fn generate(&self, prompt: &str) -> Result<GeneratedPlaylist, GenerateError> {
        let api_key = self.api_key.as_deref().ok_or(GenerateError::MissingApiKey)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt_text(prompt, GENERATED_SONG_COUNT)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(GENERATED_SONG_COUNT),
            },
        };

        info!(model = self.model.as_str(), "generate_playlist_request");
        let response = self
            .client
            .post(format!("{GEMINI_ENDPOINT}/{}:generateContent", self.model))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "generate_playlist_rejected");
            return Err(GenerateError::Status(status.as_u16()));
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body
            .text()
            .ok_or_else(|| GenerateError::Malformed("no candidate text".to_string()))?;
        debug!(len = text.len(), "generate_playlist_response");

        Ok(serde_json::from_str(text.trim())?)
    }
}
