//! Project data models

use serde::{Deserialize, Serialize};

use crate::gitlab::traits::GitlabResource;

/// Project data from GitLab API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub path: String,
    pub path_with_namespace: String,
    #[serde(default)]
    pub name_with_namespace: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub namespace: Option<ProjectNamespace>,
}

/// Owning namespace embedded in project responses
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectNamespace {
    pub id: u64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub full_path: Option<String>,
}

impl GitlabResource for Project {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn full_path(&self) -> &str {
        &self.path_with_namespace
    }
}

impl Project {
    /// Identifier of the owning namespace, when embedded in the response
    pub fn namespace_id(&self) -> Option<u64> {
        self.namespace.as_ref().map(|ns| ns.id)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn web_url(&self) -> &str {
        self.web_url.as_deref().unwrap_or("")
    }
}
