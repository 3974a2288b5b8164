//! Repository service - Handles repository-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateRepository, Repository, UpdateRepository};
use crate::errors::AppResult;
use crate::infra::RepositoryStore;

/// Repository service trait for dependency injection.
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// List all repositories in insertion order
    async fn list_repositories(&self) -> AppResult<Vec<Repository>>;

    /// Create a repository with a fresh id and zero likes
    async fn create_repository(&self, input: CreateRepository) -> AppResult<Repository>;

    /// Update title, url and techs (non-empty values only)
    async fn update_repository(&self, id: Uuid, changes: UpdateRepository) -> AppResult<Repository>;

    /// Remove a repository
    async fn delete_repository(&self, id: Uuid) -> AppResult<()>;

    /// Add one like to a repository
    async fn like_repository(&self, id: Uuid) -> AppResult<Repository>;

    /// Number of live repositories
    async fn count_repositories(&self) -> AppResult<usize>;
}

/// Concrete implementation of RepositoryService over a store.
pub struct RepositoryManager<S: RepositoryStore> {
    store: Arc<S>,
}

impl<S: RepositoryStore> RepositoryManager<S> {
    /// Create new repository service instance
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: RepositoryStore> RepositoryService for RepositoryManager<S> {
    async fn list_repositories(&self) -> AppResult<Vec<Repository>> {
        self.store.list().await
    }

    async fn create_repository(&self, input: CreateRepository) -> AppResult<Repository> {
        let repository = self.store.insert(Repository::new(input)).await?;
        tracing::debug!(id = %repository.id, "Repository created");
        Ok(repository)
    }

    async fn update_repository(&self, id: Uuid, changes: UpdateRepository) -> AppResult<Repository> {
        let repository = self.store.update(id, changes).await.inspect_err(|e| {
            tracing::debug!(%id, "Repository update failed: {}", e);
        })?;
        tracing::debug!(%id, "Repository updated");
        Ok(repository)
    }

    async fn delete_repository(&self, id: Uuid) -> AppResult<()> {
        self.store.delete(id).await.inspect_err(|e| {
            tracing::debug!(%id, "Repository delete failed: {}", e);
        })?;
        tracing::debug!(%id, "Repository deleted");
        Ok(())
    }

    async fn like_repository(&self, id: Uuid) -> AppResult<Repository> {
        let repository = self.store.like(id).await.inspect_err(|e| {
            tracing::debug!(%id, "Repository like failed: {}", e);
        })?;
        tracing::debug!(%id, likes = repository.likes, "Repository liked");
        Ok(repository)
    }

    async fn count_repositories(&self) -> AppResult<usize> {
        self.store.count().await
    }
}
