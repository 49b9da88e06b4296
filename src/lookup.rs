//! The permission lookup capability.
//!
//! [`check`](crate::check) only needs "given a repository and an actor,
//! what permission does the actor hold". Anything that can answer that
//! implements [`Lookup`]: the REST client in [`github`](crate::github), or a
//! stub in tests.

use async_trait::async_trait;
use serde::Deserialize;

use crate::Result;
use crate::context::Repository;

/// Collaborator permission record returned by the permission API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CollaboratorPermission {
    /// Legacy level name (`none`, `read`, `write`, `admin`).
    #[serde(default)]
    pub permission: Option<String>,
    /// Finer-grained role (`maintain`, `triage`, custom roles). Informational.
    #[serde(default)]
    pub role_name: Option<String>,
}

impl CollaboratorPermission {
    pub fn with_permission(permission: impl Into<String>) -> Self {
        Self {
            permission: Some(permission.into()),
            role_name: None,
        }
    }
}

/// Fetch an actor's permission on a repository.
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn collaborator_permission(
        &self,
        repository: &Repository,
        username: &str,
    ) -> Result<CollaboratorPermission>;
}
