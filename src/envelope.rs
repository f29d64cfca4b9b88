//! JSON-API style response envelopes.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub count: usize,
    pub per_page: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl Pagination {
    /// Window of `total` results for 1-based `page`. Out-of-range pages are
    /// empty rather than an error.
    pub fn new(total: usize, per_page: usize, page: usize) -> Self {
        let per_page = per_page.max(1);
        let current_page = page.max(1);
        let start = (current_page - 1).saturating_mul(per_page).min(total);
        let count = (total - start).min(per_page);
        Self {
            total,
            count,
            per_page,
            current_page,
            total_pages: total.div_ceil(per_page).max(1),
        }
    }

    /// Offset of the first result on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page - 1).saturating_mul(self.per_page).min(self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection<T> {
    pub data: Vec<T>,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_windows() {
        let first = Pagination::new(250, 100, 1);
        assert_eq!((first.count, first.total_pages, first.offset()), (100, 3, 0));

        let last = Pagination::new(250, 100, 3);
        assert_eq!((last.count, last.offset()), (50, 200));

        let beyond = Pagination::new(250, 100, 9);
        assert_eq!(beyond.count, 0);
        assert_eq!(beyond.offset(), 250);
    }

    #[test]
    fn empty_result_has_one_page() {
        let empty = Pagination::new(0, 100, 1);
        assert_eq!((empty.count, empty.total_pages), (0, 1));
    }

    #[test]
    fn collection_serializes_meta() {
        let body = Collection {
            data: vec![1, 2],
            meta: Meta {
                pagination: Pagination::new(2, 100, 1),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": [1, 2],
                "meta": {"pagination": {
                    "total": 2, "count": 2, "perPage": 100, "currentPage": 1, "totalPages": 1
                }}
            })
        );
    }
}
