pub mod error;
pub mod generate;
pub mod model;
pub mod seed;
pub mod store;

pub use error::CatalogError;
pub use model::{Album, CatalogItem, Playlist, Song};
pub use store::Catalog;
