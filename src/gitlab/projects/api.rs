//! Project API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::gitlab::pagination::Page;
use crate::gitlab::GitlabClient;

use super::models::Project;

impl GitlabClient {
    /// Get one page of a group's projects, optionally filtered server-side
    ///
    /// GitLab matches `search` against project name and path (substring);
    /// an empty term lists every project of the group.
    pub async fn group_projects_page(
        &self,
        group_id: u64,
        search: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Project>> {
        let path = format!(
            "/{}/{}/{}?search={}",
            api::GROUPS,
            group_id,
            api::PROJECTS,
            urlencoding::encode(search)
        );
        let error_context = format!("projects of group {} (search: {:?})", group_id, search);

        self.fetch_page(&path, page, per_page, &error_context).await
    }

    /// Instance-wide project search (first page of results only)
    pub async fn global_project_search(&self, term: &str) -> Result<Vec<Project>> {
        let path = format!(
            "/{}?scope=projects&search={}",
            api::SEARCH,
            urlencoding::encode(term)
        );
        self.fetch_list(&path, &format!("project search for {:?}", term))
            .await
    }

    /// Get a single project by ID
    pub async fn project_by_id(&self, project_id: u64) -> Result<Option<Project>> {
        debug!("Fetching project directly by ID: {}", project_id);
        let path = format!("/{}/{}", api::PROJECTS, project_id);
        self.fetch_resource_by_path(&path, &format!("project {}", project_id))
            .await
    }
}
