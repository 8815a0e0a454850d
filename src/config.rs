/// Configuration constants for the GitLab REST API
pub mod api {
    /// Base path for GitLab API v4
    pub const BASE_PATH: &str = "/api/v4";

    /// Groups endpoint
    pub const GROUPS: &str = "groups";

    /// Subgroups segment (under a group)
    pub const SUBGROUPS: &str = "subgroups";

    /// Projects endpoint
    pub const PROJECTS: &str = "projects";

    /// Global search endpoint
    pub const SEARCH: &str = "search";

    /// Header carrying the personal access token
    pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

    /// Default page size for listing requests
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    /// Largest page size GitLab accepts
    pub const MAX_PAGE_SIZE: u32 = 100;
}

/// Offset pagination headers returned by GitLab
pub mod headers {
    pub const PAGE: &str = "x-page";
    pub const TOTAL_PAGES: &str = "x-total-pages";
    pub const PER_PAGE: &str = "x-per-page";
    pub const NEXT_PAGE: &str = "x-next-page";
}

/// Environment variables consumed by the CLI
pub mod env {
    /// GitLab instance URL (e.g. https://gitlab.com)
    pub const URL: &str = "GITLAB_URL";

    /// Personal access token
    pub const TOKEN: &str = "GITLAB_API_KEY";
}

/// Default values for CLI
pub mod defaults {
    /// Default GitLab instance
    pub const URL: &str = "https://gitlab.com";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
