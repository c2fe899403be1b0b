use std::collections::HashMap;

use serde::Deserialize;

use crate::catalog::{
    error::CatalogError,
    model::{Album, Playlist, Song},
    store::Catalog,
};

const SEED_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, Deserialize)]
struct SeedCatalog {
    songs: Vec<Song>,
    playlists: Vec<SeedPlaylist>,
    albums: Vec<SeedAlbum>,
}

#[derive(Debug, Deserialize)]
struct SeedPlaylist {
    id: String,
    name: String,
    owner: String,
    cover: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    likes: Option<u64>,
    #[serde(default)]
    total_duration: Option<String>,
    songs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SeedAlbum {
    id: String,
    name: String,
    artist: String,
    year: u16,
    cover: String,
    #[serde(default)]
    dominant_color: Option<String>,
    songs: Vec<String>,
}

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_seed_json(SEED_CATALOG)
    }

    /// Playlists and albums in seed JSON list song ids; they are resolved
    /// into owned songs here.
    pub fn from_seed_json(json: &str) -> Result<Self, CatalogError> {
        let seed: SeedCatalog = serde_json::from_str(json)?;
        let by_id: HashMap<&str, &Song> = seed.songs.iter().map(|s| (s.id.as_str(), s)).collect();

        let resolve = |owner: &str, ids: &[String]| -> Result<Vec<Song>, CatalogError> {
            ids.iter()
                .map(|id| {
                    by_id.get(id.as_str()).map(|s| (*s).clone()).ok_or_else(|| {
                        CatalogError::UnknownSong {
                            owner: owner.to_string(),
                            song_id: id.clone(),
                        }
                    })
                })
                .collect()
        };

        let playlists = seed
            .playlists
            .iter()
            .map(|p| -> Result<Playlist, CatalogError> {
                Ok(Playlist {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    songs: resolve(&p.id, &p.songs)?,
                    owner: p.owner.clone(),
                    cover: p.cover.clone(),
                    description: p.description.clone(),
                    likes: p.likes,
                    total_duration: p.total_duration.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let albums = seed
            .albums
            .iter()
            .map(|a| -> Result<Album, CatalogError> {
                Ok(Album {
                    id: a.id.clone(),
                    name: a.name.clone(),
                    artist: a.artist.clone(),
                    year: a.year,
                    cover: a.cover.clone(),
                    songs: resolve(&a.id, &a.songs)?,
                    dominant_color: a.dominant_color.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Catalog::new(playlists, albums, seed.songs)
    }
}
