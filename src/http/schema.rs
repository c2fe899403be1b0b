use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// What the generator hands back: a name and the song descriptors it picked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlaylist {
    pub playlist_name: String,
    pub songs: Vec<SongDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SongDescriptor {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
    #[serde(default)]
    pub lyrics: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

pub(crate) fn prompt_text(prompt: &str, song_count: usize) -> String {
    format!(
        "Generate a playlist based on this prompt: \"{prompt}\". Create a creative playlist name \
         and a list of {song_count} songs with artist, album, duration, and lyrics. \
         Use \\n for new lines in the lyrics."
    )
}

pub(crate) fn response_schema(song_count: usize) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "playlistName": {
                "type": "STRING",
                "description": "A creative name for the playlist, inspired by the prompt."
            },
            "songs": {
                "type": "ARRAY",
                "description": format!("A list of {song_count} songs that fit the playlist description."),
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "artist": { "type": "STRING" },
                        "album": { "type": "STRING" },
                        "duration": { "type": "STRING", "description": "Duration in M:SS format" },
                        "lyrics": { "type": "STRING", "description": "The full lyrics for the song. Use \\n for new lines." }
                    },
                    "required": ["title", "artist", "album", "duration"]
                }
            }
        },
        "required": ["playlistName", "songs"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_candidate_text() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"{\"playlistName\":\"Rain\",\"songs\":[]}"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let playlist: GeneratedPlaylist = serde_json::from_str(&response.text().unwrap()).unwrap();
        assert_eq!(playlist.playlist_name, "Rain");
        assert!(playlist.songs.is_empty());
    }

    #[test]
    fn empty_candidates_have_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(response.text(), None);
    }
}
