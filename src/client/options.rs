//! Optional query parameters shared by several operations.
//!
//! Every field is an `Option`; unset fields are never sent.

use super::endpoint::Endpoint;

/// Documented sort keys. Prefix with `-` for descending order.
pub mod sort {
    pub const NAME: &str = "name";
    pub const UPDATED: &str = "updated";
    pub const STABLE: &str = "stable";
    pub const REQUEST_TIMESTAMP: &str = "request_timestamp";
}

/// Paging and audit knobs of every `list_*` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_limit(mut self, limit: i64) -> Self {
        self.page_limit = Some(limit);
        self
    }

    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Continue from a previous page's `next_cursor`.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn include_audit(mut self, include: bool) -> Self {
        self.include_audit = Some(include);
        self
    }

    pub(crate) fn apply(&self, endpoint: Endpoint) -> Endpoint {
        endpoint
            .query_opt("page_limit", self.page_limit)
            .query_opt("include_count", self.include_count)
            .query_opt("sort", self.sort.as_deref())
            .query_opt("cursor", self.cursor.as_deref())
            .query_opt("include_audit", self.include_audit)
    }
}

/// Options of `get_workspace`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetWorkspaceOptions {
    /// Include every intent, entity and dialog node in the response.
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    /// Only `stable` is accepted by the service.
    pub sort: Option<String>,
}

impl GetWorkspaceOptions {
    pub fn export() -> Self {
        Self {
            export: Some(true),
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, endpoint: Endpoint) -> Endpoint {
        endpoint
            .query_opt("export", self.export)
            .query_opt("include_audit", self.include_audit)
            .query_opt("sort", self.sort.as_deref())
    }
}

/// Options of the single-resource getters that support export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
}

impl GetOptions {
    pub fn export() -> Self {
        Self {
            export: Some(true),
            include_audit: None,
        }
    }

    pub(crate) fn apply(&self, endpoint: Endpoint) -> Endpoint {
        endpoint
            .query_opt("export", self.export)
            .query_opt("include_audit", self.include_audit)
    }
}

/// Options of updates that can merge nested lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Add nested items to the existing ones instead of replacing them.
    pub append: Option<bool>,
    pub include_audit: Option<bool>,
}

impl UpdateOptions {
    pub fn append() -> Self {
        Self {
            append: Some(true),
            include_audit: None,
        }
    }

    pub(crate) fn apply(&self, endpoint: Endpoint) -> Endpoint {
        endpoint
            .query_opt("append", self.append)
            .query_opt("include_audit", self.include_audit)
    }
}

/// Options of `list_logs` and `list_all_logs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogListOptions {
    pub sort: Option<String>,
    /// Filter query, see the service's log filter syntax.
    pub filter: Option<String>,
    pub page_limit: Option<i64>,
    pub cursor: Option<String>,
}

impl LogListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn page_limit(mut self, limit: i64) -> Self {
        self.page_limit = Some(limit);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub(crate) fn apply(&self, endpoint: Endpoint) -> Endpoint {
        endpoint
            .query_opt("sort", self.sort.as_deref())
            .query_opt("filter", self.filter.as_deref())
            .query_opt("page_limit", self.page_limit)
            .query_opt("cursor", self.cursor.as_deref())
    }
}

/// Options of `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    /// Return `output.nodes_visited_details` with titles and conditions.
    pub nodes_visited_details: Option<bool>,
}

impl MessageOptions {
    pub(crate) fn apply(&self, endpoint: Endpoint) -> Endpoint {
        endpoint.query_opt("nodes_visited_details", self.nodes_visited_details)
    }
}
