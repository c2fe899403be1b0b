use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{owner} references unknown song {song_id}")]
    UnknownSong { owner: String, song_id: String },

    #[error("Malformed seed catalog: {0}")]
    Seed(#[from] serde_json::Error),
}
