//! Common traits for GitLab entities and the transport they are fetched over

use async_trait::async_trait;

use crate::error::Result;
use crate::gitlab::pagination::Page;
use crate::gitlab::{Group, Project};

/// Common trait for namespace entities (groups and projects)
pub trait GitlabResource {
    /// Numeric identifier
    fn id(&self) -> u64;

    /// Display name
    fn name(&self) -> &str;

    /// Structural path segment (e.g. `client-go`)
    fn path(&self) -> &str;

    /// Path including all ancestor group segments
    fn full_path(&self) -> &str;

    /// Exact structural-path equality. Never a substring match.
    fn has_path(&self, path: &str) -> bool {
        self.path() == path
    }
}

/// Read-only access to the GitLab REST API.
///
/// One call is one HTTP request; pagination is driven by the caller.
#[async_trait]
pub trait GitlabApi: Send + Sync {
    /// `GET /groups/{id}/subgroups?all_available=true`
    async fn list_subgroups_page(
        &self,
        group_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Group>>;

    /// `GET /groups/{id}/projects?search={term}`; an empty term is unfiltered
    async fn list_projects_page(
        &self,
        group_id: u64,
        search: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Project>>;

    /// `GET /search?scope=projects&search={term}` (first page only)
    async fn search_projects(&self, term: &str) -> Result<Vec<Project>>;

    /// `GET /projects/{id}`; `None` on 404
    async fn get_project(&self, id: u64) -> Result<Option<Project>>;

    /// `GET /groups/{id}`; `None` on 404
    async fn get_group(&self, id: u64) -> Result<Option<Group>>;
}
