//! In-memory repository store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Repository, UpdateRepository};
use crate::errors::{AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository store trait for dependency injection.
///
/// Every lookup-and-mutate operation is atomic with respect to the others.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// List all repositories in insertion order
    async fn list(&self) -> AppResult<Vec<Repository>>;

    /// Append a repository to the end of the collection
    async fn insert(&self, repository: Repository) -> AppResult<Repository>;

    /// Merge changes into the repository with the given id
    async fn update(&self, id: Uuid, changes: UpdateRepository) -> AppResult<Repository>;

    /// Remove the repository with the given id
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Add one like to the repository with the given id
    async fn like(&self, id: Uuid) -> AppResult<Repository>;

    /// Number of live repositories
    async fn count(&self) -> AppResult<usize>;
}

/// Concrete implementation of RepositoryStore over a locked vector
#[derive(Debug, Default)]
pub struct InMemoryRepositoryStore {
    repositories: RwLock<Vec<Repository>>,
}

impl InMemoryRepositoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn position(repositories: &[Repository], id: Uuid) -> AppResult<usize> {
    repositories
        .iter()
        .position(|repo| repo.id == id)
        .ok_or_not_found()
}

#[async_trait]
impl RepositoryStore for InMemoryRepositoryStore {
    async fn list(&self) -> AppResult<Vec<Repository>> {
        Ok(self.repositories.read().await.clone())
    }

    async fn insert(&self, repository: Repository) -> AppResult<Repository> {
        self.repositories.write().await.push(repository.clone());
        Ok(repository)
    }

    async fn update(&self, id: Uuid, changes: UpdateRepository) -> AppResult<Repository> {
        let mut repositories = self.repositories.write().await;
        let index = position(&repositories, id)?;

        let repo = &mut repositories[index];
        repo.apply_update(changes);
        Ok(repo.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut repositories = self.repositories.write().await;
        let index = position(&repositories, id)?;

        repositories.remove(index);
        Ok(())
    }

    async fn like(&self, id: Uuid) -> AppResult<Repository> {
        let mut repositories = self.repositories.write().await;
        let index = position(&repositories, id)?;

        let repo = &mut repositories[index];
        repo.like();
        Ok(repo.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.repositories.read().await.len())
    }
}
