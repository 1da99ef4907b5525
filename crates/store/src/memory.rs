use tokio::sync::RwLock;

use super::{FavoritesRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryFavoritesRepository {
    favorites: RwLock<Vec<String>>,
}

impl InMemoryFavoritesRepository {
    pub fn with_entries(entries: Vec<String>) -> Self {
        Self { favorites: RwLock::new(entries) }
    }
}

#[async_trait::async_trait]
impl FavoritesRepository for InMemoryFavoritesRepository {
    async fn append(&self, entry: String) -> Result<(), RepositoryError> {
        let mut favorites = self.favorites.write().await;
        favorites.push(entry);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, RepositoryError> {
        let favorites = self.favorites.read().await;
        Ok(favorites.clone())
    }
}
