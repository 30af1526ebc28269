//! Page/sort arithmetic for paginated listings.
//!
//! [`PageRequest`] carries a validated zero-based page window plus a sort
//! key; [`Page`] is the envelope returned to callers. Store adapters decide
//! how the window is fetched, this module only owns the math around it.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page number used when the caller does not supply one.
pub const DEFAULT_PAGE_NUMBER: i64 = 0;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Sort field used when the caller does not supply one.
pub const DEFAULT_SORT_BY: &str = "id";

/// Sort direction used when the caller does not supply one.
pub const DEFAULT_SORT_DIRECTION: &str = "asc";

// ---------------------------------------------------------------------------
// Sort direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `"desc"` in any casing selects descending order; anything else is ascending.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

// ---------------------------------------------------------------------------
// Page request
// ---------------------------------------------------------------------------

/// A validated request for one zero-based page of results ordered by `S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<S> {
    page_no: i64,
    page_size: i64,
    sort_by: S,
    direction: SortDirection,
}

impl<S> PageRequest<S> {
    /// Build a page request.
    ///
    /// Fails with [`CoreError::Validation`] when `page_no` is negative or
    /// `page_size` is below one. No other clamping is applied: a page past the
    /// end is legal and simply comes back empty.
    pub fn new(
        page_no: i64,
        page_size: i64,
        sort_by: S,
        direction: SortDirection,
    ) -> Result<Self, CoreError> {
        if page_no < 0 {
            return Err(CoreError::Validation(
                "Page index must not be less than zero".into(),
            ));
        }
        if page_size < 1 {
            return Err(CoreError::Validation(
                "Page size must not be less than one".into(),
            ));
        }
        Ok(Self {
            page_no,
            page_size,
            sort_by,
            direction,
        })
    }

    pub fn page_no(&self) -> i64 {
        self.page_no
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn sort_by(&self) -> &S {
        &self.sort_by
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> i64 {
        self.page_no.saturating_mul(self.page_size)
    }
}

// ---------------------------------------------------------------------------
// Page envelope
// ---------------------------------------------------------------------------

/// One page of results together with the totals across all pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_no: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub last: bool,
}

impl<T> Page<T> {
    /// Wrap the rows fetched for `request` in an envelope.
    pub fn new<S>(content: Vec<T>, request: &PageRequest<S>, total_elements: i64) -> Self {
        let total_pages = total_pages(total_elements, request.page_size());
        Self {
            content,
            page_no: request.page_no(),
            page_size: request.page_size(),
            total_elements,
            total_pages,
            last: is_last_page(request.page_no(), total_pages),
        }
    }

    /// Convert the content while keeping the totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_no: self.page_no,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last: self.last,
        }
    }
}

/// `ceil(total_elements / page_size)`, zero for an empty result set.
pub fn total_pages(total_elements: i64, page_size: i64) -> i64 {
    if page_size <= 0 || total_elements <= 0 {
        return 0;
    }
    total_elements / page_size + i64::from(total_elements % page_size != 0)
}

/// A page is the last one when no page follows it.
pub fn is_last_page(page_no: i64, total_pages: i64) -> bool {
    page_no.saturating_add(1) >= total_pages
}
