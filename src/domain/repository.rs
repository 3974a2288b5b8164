//! Repository domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Repository domain entity
///
/// Fields the client never supplied stay `None` and are left out of the
/// serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Repository {
    /// Server-assigned identifier, immutable
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "umbriel")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://github.com/example/umbriel")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = json!(["Node.js", "ReactJS"]))]
    pub techs: Option<Vec<String>>,
    /// Only ever incremented through [`Repository::like`]
    pub likes: u64,
}

impl Repository {
    /// Create a new repository with a fresh id and no likes
    pub fn new(input: CreateRepository) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            url: input.url,
            techs: input.techs,
            likes: 0,
        }
    }

    /// Merge client-supplied changes into this repository.
    ///
    /// A field is replaced only when the new value is non-empty; an empty
    /// string or empty list leaves the current value in place. `likes` is
    /// never touched.
    pub fn apply_update(&mut self, changes: UpdateRepository) {
        if let Some(title) = changes.title.filter(|t| !t.is_empty()) {
            self.title = Some(title);
        }
        if let Some(url) = changes.url.filter(|u| !u.is_empty()) {
            self.url = Some(url);
        }
        if let Some(techs) = changes.techs.filter(|t| !t.is_empty()) {
            self.techs = Some(techs);
        }
    }

    /// Register one like
    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}

/// Repository creation data transfer object
///
/// Missing or `null` fields are accepted; a field of the wrong JSON type
/// fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateRepository {
    #[serde(default)]
    #[schema(example = "umbriel")]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(example = "https://github.com/example/umbriel")]
    pub url: Option<String>,
    #[serde(default)]
    #[schema(example = json!(["Node.js", "ReactJS"]))]
    pub techs: Option<Vec<String>>,
}

/// Repository update data transfer object
///
/// Every field is optional; empty values are ignored on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UpdateRepository {
    #[serde(default)]
    #[schema(example = "umbriel-v2")]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub techs: Option<Vec<String>>,
}
