//! Actor and repository identity supplied by the execution environment.

use std::collections::HashMap;
use std::fmt;

use crate::{Error, Result};

/// A repository identity (`owner/name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parse an `owner/name` slug.
    pub fn parse(slug: &str) -> Result<Self> {
        match slug.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(Error::Config(format!(
                "repository must be in owner/name form, got {slug:?}"
            ))),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Who triggered the run, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub actor: String,
    pub repository: Repository,
}

impl Context {
    /// Read `GITHUB_ACTOR` and `GITHUB_REPOSITORY` from a variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let actor = vars
            .get("GITHUB_ACTOR")
            .filter(|a| !a.is_empty())
            .ok_or_else(|| Error::Config("GITHUB_ACTOR must be set".into()))?;
        let slug = vars
            .get("GITHUB_REPOSITORY")
            .ok_or_else(|| Error::Config("GITHUB_REPOSITORY must be set".into()))?;

        Ok(Self {
            actor: actor.clone(),
            repository: Repository::parse(slug)?,
        })
    }
}
