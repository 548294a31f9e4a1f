/// Production API host
pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com";

/// Path prefix of every API route
pub const NOTION_API_PREFIX: &str = "/v1";

/// Pinned protocol version sent with every request
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Header carrying [`NOTION_API_VERSION`]
pub const NOTION_VERSION_HEADER: &str = "Notion-Version";

/// Body content type for every request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Longest slice of a failed response body kept in error reports
pub const MAX_ERROR_BODY_CHARS: usize = 500;
