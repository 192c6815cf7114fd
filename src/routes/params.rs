use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Rows per page, default 10. Values below 1 disable paging.
    #[serde(rename = "pageSize")]
    pub page_size: Option<i64>,
    /// 1-based page number, default 1.
    pub page: Option<i64>,
}

/// The slice of the listing a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_size: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_count: i64,
    pub offset: u64,
    pub limit: Option<u64>,
}

impl Pagination {
    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Resolves the requested page against the row count. The page is clamped
    /// into `1..=total_pages`; an empty listing still reports page 1.
    pub fn window(&self, total_count: u64) -> PageWindow {
        let page_size = self.page_size();

        let total_pages = if page_size < 1 {
            i64::from(total_count > 0)
        } else {
            i64::try_from(total_count.div_ceil(page_size as u64)).unwrap_or(i64::MAX)
        };
        let total_count = i64::try_from(total_count).unwrap_or(i64::MAX);

        let requested = self.page.unwrap_or(1);
        let current_page = requested.min(total_pages).max(1);

        let (offset, limit) = if page_size < 1 {
            (0, None)
        } else {
            let offset = (current_page - 1) * page_size;
            (offset as u64, Some(page_size as u64))
        };

        PageWindow {
            page_size,
            current_page,
            total_pages,
            total_count,
            offset,
            limit,
        }
    }
}

impl PageWindow {
    pub fn previous_page(&self) -> Option<i64> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<i64> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    pub id: i32,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryLinkQuery {
    pub producto_id: i32,
    pub categoria_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(page_size: i64, page: i64) -> Pagination {
        Pagination {
            page_size: Some(page_size),
            page: Some(page),
        }
    }

    #[test]
    fn defaults_to_first_page_of_ten() {
        let window = Pagination::default().window(25);
        assert_eq!(window.page_size, 10);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.offset, 0);
        assert_eq!(window.limit, Some(10));
        assert_eq!(window.previous_page(), None);
        assert_eq!(window.next_page(), Some(2));
    }

    #[test]
    fn offset_follows_page_and_size() {
        let window = pagination(5, 3).window(40);
        assert_eq!(window.offset, 10);
        assert_eq!(window.previous_page(), Some(2));
        assert_eq!(window.next_page(), Some(4));
    }

    #[test]
    fn last_page_has_no_next() {
        let window = pagination(10, 3).window(25);
        assert_eq!(window.current_page, 3);
        assert_eq!(window.next_page(), None);
        assert_eq!(window.offset, 20);
    }

    #[test]
    fn empty_listing_reports_page_one_of_zero() {
        let window = pagination(10, 4).window(0);
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.previous_page(), None);
        assert_eq!(window.next_page(), None);
        assert_eq!(window.offset, 0);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let past_end = pagination(10, 99).window(25);
        assert_eq!(past_end.current_page, 3);
        assert_eq!(past_end.offset, 20);

        let before_start = pagination(10, -2).window(25);
        assert_eq!(before_start.current_page, 1);
        assert_eq!(before_start.offset, 0);
    }

    #[test]
    fn non_positive_page_size_returns_everything() {
        let window = pagination(0, 2).window(7);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.limit, None);
        assert_eq!(window.offset, 0);

        assert_eq!(pagination(-1, 1).window(0).total_pages, 0);
    }

    #[test]
    fn total_pages_is_the_ceiling_for_every_size() {
        for page_size in 1..=12_i64 {
            for total in 0..=60_u64 {
                let window = pagination(page_size, 1_000).window(total);
                let expected = (total as i64 + page_size - 1) / page_size;
                assert_eq!(window.total_pages, expected, "size {page_size}, total {total}");
                if total > 0 {
                    assert!(window.current_page <= window.total_pages);
                    assert!(window.offset < total);
                }
            }
        }
    }
}
