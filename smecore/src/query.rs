/// Default page size for listings.
pub const DEFAULT_LIMIT: i64 = 10;

/// Parameters of a single listing request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListQuery {
    /// Page offset in record units, not a page index.
    pub skip: i64,
    pub limit: i64,
    pub search: Option<String>,
    pub status: Option<String>,
    /// Entity-specific filter pairs, appended to the query string as-is.
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip,
            limit,
            ..Default::default()
        }
    }

    pub fn search(mut self, val: impl Into<String>) -> Self {
        self.search = Some(val.into());
        self
    }

    pub fn status(mut self, val: impl Into<String>) -> Self {
        self.status = Some(val.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, val: impl Into<String>) -> Self {
        self.filters.push((key.into(), val.into()));
        self
    }

    /// Key/value pairs for the request query string.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("skip".to_string(), self.skip.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}

/// Pagination and filter state of one store, plus the last known
/// server-reported total.
///
/// `total` is independent of how many records are currently cached; it
/// only moves on a successful list fetch or on a count-affecting mutation
/// the store reflects without a refetch.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState {
    pub skip: i64,
    pub limit: i64,
    pub search_query: String,
    pub status_filter: Option<String>,
    pub total: i64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
            search_query: String::new(),
            status_filter: None,
            total: 0,
        }
    }
}

impl QueryState {
    /// Changing the search term invalidates the current page position.
    pub fn set_search_query(&mut self, val: impl Into<String>) {
        self.search_query = val.into();
        self.skip = 0;
    }

    /// Changing the status filter invalidates the current page position.
    pub fn set_status_filter(&mut self, val: Option<String>) {
        self.status_filter = val;
        self.skip = 0;
    }

    /// Moves to a new page offset without touching the filters.
    pub fn set_page_offset(&mut self, skip: i64) {
        self.skip = skip.max(0);
    }

    /// The listing request this state currently describes.
    pub fn to_list_query(&self) -> ListQuery {
        let mut query = ListQuery::new(self.skip, self.limit);
        if !self.search_query.is_empty() {
            query = query.search(self.search_query.as_str());
        }
        if let Some(status) = &self.status_filter {
            query = query.status(status.as_str());
        }
        query
    }
}
