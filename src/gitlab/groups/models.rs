//! Group data models

use serde::{Deserialize, Serialize};

use crate::gitlab::traits::GitlabResource;

/// Group data from GitLab API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub path: String,
    pub full_path: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// `None` for top-level groups
    #[serde(default)]
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl GitlabResource for Group {
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
        &self.full_path
    }
}

impl Group {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn web_url(&self) -> &str {
        self.web_url.as_deref().unwrap_or("")
    }
}
