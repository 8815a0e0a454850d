//! Group API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::gitlab::pagination::Page;
use crate::gitlab::GitlabClient;

use super::models::Group;

impl GitlabClient {
    /// Get one page of the immediate subgroups of a group
    ///
    /// Uses `all_available=true` so groups visible to the token but not
    /// joined by it are listed too.
    pub async fn subgroups_page(
        &self,
        group_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Group>> {
        let path = format!(
            "/{}/{}/{}?all_available=true",
            api::GROUPS,
            group_id,
            api::SUBGROUPS
        );
        let error_context = format!("subgroups of group {}", group_id);

        self.fetch_page(&path, page, per_page, &error_context).await
    }

    /// Get a single group by ID
    pub async fn group_by_id(&self, group_id: u64) -> Result<Option<Group>> {
        debug!("Fetching group directly by ID: {}", group_id);
        let path = format!("/{}/{}", api::GROUPS, group_id);
        self.fetch_resource_by_path(&path, &format!("group {}", group_id))
            .await
    }
}
