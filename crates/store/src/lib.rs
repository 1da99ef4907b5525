//! Persistent list of saved outfit recommendations.

use async_trait::async_trait;
use thiserror::Error;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileFavoritesRepository;
pub use memory::InMemoryFavoritesRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("favorites io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("favorites decode error: {0}")]
    Decode(String),
}

/// Append-only store of recommendation texts, oldest first.
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    async fn append(&self, entry: String) -> Result<(), RepositoryError>;
    async fn list(&self) -> Result<Vec<String>, RepositoryError>;
}
