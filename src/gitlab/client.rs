//! GitLab HTTP client for API interactions

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{GitlabError, Result};
use crate::gitlab::pagination::{Page, PageDescriptor};
use crate::gitlab::traits::GitlabApi;
use crate::gitlab::{Group, Project};

/// GitLab API client
pub struct GitlabClient {
    client: Client,
    token: String,
    /// API root, always ending in `/api/v4`
    api_url: String,
}

impl GitlabClient {
    /// Create a new client with connection pooling and request timeouts
    ///
    /// `base_url` is the instance URL (`https://gitlab.example.com`); an URL
    /// that already points at the API root is accepted as-is.
    pub fn new(token: String, base_url: &str) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            // TCP keepalive to maintain connections
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            api_url: Self::api_root(base_url),
        }
    }

    fn api_root(base_url: &str) -> String {
        let trimmed = base_url.trim_end_matches('/');
        if trimmed.ends_with(api::BASE_PATH) {
            trimmed.to_string()
        } else {
            format!("{}{}", trimmed, api::BASE_PATH)
        }
    }

    /// API root URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Create a GET request builder carrying the access token
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(api::TOKEN_HEADER, &self.token)
            .header("Accept", "application/json")
    }

    /// Return error for non-success status codes, otherwise the response
    fn check_status(
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<reqwest::Response> {
        if !response.status().is_success() {
            return Err(GitlabError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response)
    }

    /// Fetch one page of a listing endpoint.
    ///
    /// `path` may already carry query parameters; paging parameters are
    /// appended.
    pub async fn fetch_page<T>(
        &self,
        path: &str,
        page: u32,
        per_page: u32,
        error_context: &str,
    ) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let url = format!(
            "{}{}{}per_page={}&page={}",
            self.api_url, path, separator, per_page, page
        );

        debug!("Fetching page {} from: {}", page, url);

        let response = self.get(&url).send().await?;
        let page_context = format!("{} (page {})", error_context, page);
        let response = Self::check_status(response, &page_context)?;

        let descriptor = PageDescriptor::from_headers(response.headers(), page, per_page);
        let items: Vec<T> = response.json().await?;

        Ok(Page::new(items, descriptor))
    }

    /// Fetch a single resource by API path.
    ///
    /// Returns `None` for 404 and an error for any other non-success status.
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.api_url, path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            404 => Ok(None),
            _ => {
                let response = Self::check_status(response, resource_label)?;
                Ok(Some(response.json().await?))
            }
        }
    }

    /// Fetch an unpaginated list (single response)
    pub async fn fetch_list<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.api_url, path);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        let response = Self::check_status(response, error_context)?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl GitlabApi for GitlabClient {
    async fn list_subgroups_page(
        &self,
        group_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Group>> {
        self.subgroups_page(group_id, page, per_page).await
    }

    async fn list_projects_page(
        &self,
        group_id: u64,
        search: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Project>> {
        self.group_projects_page(group_id, search, page, per_page)
            .await
    }

    async fn search_projects(&self, term: &str) -> Result<Vec<Project>> {
        self.global_project_search(term).await
    }

    async fn get_project(&self, id: u64) -> Result<Option<Project>> {
        self.project_by_id(id).await
    }

    async fn get_group(&self, id: u64) -> Result<Option<Group>> {
        self.group_by_id(id).await
    }
}

#[cfg(test)]
impl GitlabClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url)
    }
}


#[cfg(test)]
mod pagination_tests {
    use super::*;
    use crate::gitlab::pagination::fetch_all_pages;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug, Clone)]
    struct TestItem {
        id: u64,
        name: String,
    }

    fn test_item_json(id: u64, name: &str) -> serde_json::Value {
        serde_json::json!({ "id": id, "name": name })
    }

    fn paged(body: serde_json::Value, page: u32, total_pages: u32) -> ResponseTemplate {
        let next = if page < total_pages {
            (page + 1).to_string()
        } else {
            String::new()
        };
        ResponseTemplate::new(200)
            .set_body_json(body)
            .insert_header("X-Page", page.to_string().as_str())
            .insert_header("X-Total-Pages", total_pages.to_string().as_str())
            .insert_header("X-Per-Page", "2")
            .insert_header("X-Next-Page", next.as_str())
    }

    #[tokio::test]
    async fn test_fetch_page_sends_token_and_reads_headers() {
        let mock_server = MockServer::start().await;
        let client = GitlabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v4/test-items"))
            .and(header("PRIVATE-TOKEN", "test-token"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "2"))
            .respond_with(paged(
                serde_json::json!([test_item_json(1, "Item 1"), test_item_json(2, "Item 2")]),
                1,
                3,
            ))
            .mount(&mock_server)
            .await;

        let page: Page<TestItem> = client
            .fetch_page("/test-items", 1, 2, "test items")
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].name, "Item 2");
        assert_eq!(page.descriptor.current_page, 1);
        assert_eq!(page.descriptor.total_pages, Some(3));
        assert_eq!(page.descriptor.next_page, Some(2));
        assert!(!page.descriptor.is_complete());
    }

    #[tokio::test]
    async fn test_fetch_all_pages_over_http() {
        let mock_server = MockServer::start().await;
        let client = GitlabClient::test_client(&mock_server.uri());

        for (page, ids) in [(1u32, [1u64, 2]), (2, [3, 4])] {
            let body = serde_json::json!(ids
                .iter()
                .map(|id| test_item_json(*id, &format!("Item {}", id)))
                .collect::<Vec<_>>());
            Mock::given(method("GET"))
                .and(path("/api/v4/test-items"))
                .and(query_param("page", page.to_string().as_str()))
                .respond_with(paged(body, page, 3))
                .expect(1)
                .mount(&mock_server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/api/v4/test-items"))
            .and(query_param("page", "3"))
            .respond_with(paged(serde_json::json!([test_item_json(5, "Item 5")]), 3, 3))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items: Vec<TestItem> = fetch_all_pages(2, "test items", |page, per_page| {
            client.fetch_page("/test-items", page, per_page, "test items")
        })
        .await
        .unwrap();

        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_fetch_page_with_existing_query_params() {
        let mock_server = MockServer::start().await;
        let client = GitlabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v4/test-items"))
            .and(query_param("search", "foo"))
            .and(query_param("page", "1"))
            .respond_with(paged(serde_json::json!([test_item_json(7, "foo")]), 1, 1))
            .mount(&mock_server)
            .await;

        let page: Page<TestItem> = client
            .fetch_page("/test-items?search=foo", 1, 10, "test items")
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert!(page.descriptor.is_complete());
    }

    #[tokio::test]
    async fn test_fetch_page_api_error_mentions_page() {
        let mock_server = MockServer::start().await;
        let client = GitlabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v4/test-items"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_page::<TestItem>("/test-items", 2, 10, "test items")
            .await;

        match result.unwrap_err() {
            GitlabError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("page 2"));
            }
            other => panic!("Expected GitlabError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_stops_after_failed_page() {
        let mock_server = MockServer::start().await;
        let client = GitlabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v4/test-items"))
            .and(query_param("page", "1"))
            .respond_with(paged(serde_json::json!([test_item_json(1, "Item 1")]), 1, 3))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v4/test-items"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v4/test-items"))
            .and(query_param("page", "3"))
            .respond_with(paged(serde_json::json!([]), 3, 3))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result: Result<Vec<TestItem>> =
            fetch_all_pages(1, "test items", |page, per_page| {
                client.fetch_page("/test-items", page, per_page, "test items")
            })
            .await;

        assert!(result.unwrap_err().is_transport());
    }

    #[tokio::test]
    async fn test_fetch_resource_not_found() {
        let mock_server = MockServer::start().await;
        let client = GitlabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v4/test-items/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_resource_by_path::<TestItem>("/test-items/99", "test item 99")
            .await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_resource_forbidden() {
        let mock_server = MockServer::start().await;
        let client = GitlabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v4/test-items/5"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_resource_by_path::<TestItem>("/test-items/5", "test item 5")
            .await;

        match result.unwrap_err() {
            GitlabError::Api { status, .. } => assert_eq!(status, 403),
            other => panic!("Expected GitlabError::Api, got {:?}", other),
        }
    }
}
