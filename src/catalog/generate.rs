use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    catalog::model::{Playlist, Song},
    http::{
        PlaylistGenerator,
        error::GenerateError,
        schema::GeneratedPlaylist,
    },
};

pub const GENERATED_SONG_COUNT: usize = 10;
pub const GENERATED_OWNER: &str = "Gemini AI";

/// Asks the generator for a playlist and turns the answer into catalog
/// songs. Blank prompts never reach the generator.
pub async fn generate_playlist(
    generator: &dyn PlaylistGenerator,
    prompt: &str,
    fallback_urls: &[String],
) -> Result<Playlist, GenerateError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(GenerateError::EmptyPrompt);
    }

    let generated = generator.generate(prompt).await.inspect_err(|e| {
        warn!(error = %e, "generate_playlist_failed");
    })?;

    build_playlist(generated, fallback_urls, &Uuid::new_v4().simple().to_string())
}

/// Generated songs have no audio of their own, so each borrows a URL from
/// the fallback pool in round-robin order.
pub fn build_playlist(
    generated: GeneratedPlaylist,
    fallback_urls: &[String],
    batch: &str,
) -> Result<Playlist, GenerateError> {
    if fallback_urls.is_empty() {
        return Err(GenerateError::NoPlayableSources);
    }
    let name = generated.playlist_name.trim();
    if name.is_empty() {
        return Err(GenerateError::Malformed("missing playlist name".to_string()));
    }
    if generated.songs.is_empty() {
        return Err(GenerateError::Malformed("no songs".to_string()));
    }
    if generated.songs.len() != GENERATED_SONG_COUNT {
        warn!(
            expected = GENERATED_SONG_COUNT,
            got = generated.songs.len(),
            "generated_song_count_mismatch"
        );
    }

    let songs: Vec<Song> = generated
        .songs
        .into_iter()
        .take(GENERATED_SONG_COUNT)
        .enumerate()
        .map(|(index, descriptor)| Song {
            id: format!("ai-{batch}-{index}"),
            album_cover: format!(
                "https://picsum.photos/seed/{}/200",
                urlencoding::encode(&descriptor.title)
            ),
            url: fallback_urls[index % fallback_urls.len()].clone(),
            title: descriptor.title,
            artist: descriptor.artist,
            album: descriptor.album,
            duration: descriptor.duration,
            lyrics: descriptor.lyrics,
        })
        .collect();

    info!(name, songs = songs.len(), "generated_playlist_built");

    Ok(Playlist {
        id: format!("ai-pl-{batch}"),
        name: name.to_string(),
        cover: format!(
            "https://picsum.photos/seed/{}/300",
            urlencoding::encode(name)
        ),
        owner: GENERATED_OWNER.to_string(),
        songs,
        description: None,
        likes: None,
        total_duration: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeGenerator, descriptors};

    fn pool() -> Vec<String> {
        vec!["u0".into(), "u1".into(), "u2".into()]
    }

    #[test]
    fn urls_cycle_through_pool() {
        let generated = GeneratedPlaylist {
            playlist_name: "Rainy Day".into(),
            songs: descriptors(GENERATED_SONG_COUNT),
        };
        let playlist = build_playlist(generated, &pool(), "b").unwrap();

        assert_eq!(playlist.songs.len(), GENERATED_SONG_COUNT);
        assert_eq!(playlist.songs[0].url, "u0");
        assert_eq!(playlist.songs[3].url, "u0");
        assert_eq!(playlist.songs[5].url, "u2");
        assert_eq!(playlist.songs[2].id, "ai-b-2");
        assert_eq!(playlist.id, "ai-pl-b");
        assert_eq!(playlist.owner, GENERATED_OWNER);
        assert_eq!(playlist.cover, "https://picsum.photos/seed/Rainy%20Day/300");
    }

    #[test]
    fn cover_is_keyed_by_encoded_title() {
        let mut songs = descriptors(1);
        songs[0].title = "Rock & Roll".into();
        let generated = GeneratedPlaylist {
            playlist_name: "x".into(),
            songs,
        };
        let playlist = build_playlist(generated, &pool(), "b").unwrap();
        assert_eq!(
            playlist.songs[0].album_cover,
            "https://picsum.photos/seed/Rock%20%26%20Roll/200"
        );
    }

    #[test]
    fn empty_answer_is_malformed() {
        let generated = GeneratedPlaylist {
            playlist_name: "Nothing".into(),
            songs: vec![],
        };
        assert!(matches!(
            build_playlist(generated, &pool(), "b"),
            Err(GenerateError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn blank_prompt_never_reaches_generator() {
        let generator = FakeGenerator::succeeding("unused");
        let err = generate_playlist(&generator, "   ", &pool()).await.unwrap_err();
        assert!(matches!(err, GenerateError::EmptyPrompt));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn collaborator_failure_surfaces_message() {
        let generator = FakeGenerator::failing();
        let err = generate_playlist(&generator, "lofi", &pool()).await.unwrap_err();
        assert!(!err.to_string().is_empty());
        assert_eq!(generator.calls(), 1);
    }
}
