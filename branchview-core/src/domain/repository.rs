//! Repository domain model
//!
//! Represents an entry of the public repository listing.

use serde::{Deserialize, Serialize};

/// A repository as returned by `GET /repositories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name, without the owner prefix
    pub name: String,

    /// Account that owns the repository
    pub owner: Owner,
}

/// Owner of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Account login (user or organization name)
    pub login: String,
}

impl Repository {
    /// Creates a repository record
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: Owner {
                login: owner.into(),
            },
        }
    }

    /// Returns `owner/name`, the string shown as the screen title
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner.login, self.name)
    }
}
