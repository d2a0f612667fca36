//! Page-size arithmetic for listing pages.

use std::num::NonZeroU32;
use std::ops::Range;

use crate::schema::SiteConfig;

/// Splits `total_items` into fixed-size pages. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    per_page: NonZeroU32,
}

impl Pagination {
    #[must_use]
    pub fn new(total_items: usize, per_page: NonZeroU32) -> Self {
        Self {
            total_items,
            per_page,
        }
    }

    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page.get() as usize
    }

    /// Number of pages. An empty listing still has one (empty) page.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.per_page()).max(1)
    }

    /// Item index range shown on `page`, or `None` when out of bounds.
    #[must_use]
    pub fn range(&self, page: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.page_count() {
            return None;
        }
        let start = (page - 1) * self.per_page();
        let end = (start + self.per_page()).min(self.total_items);
        Some(start..end)
    }
}

impl SiteConfig {
    /// Pagination for blog listings, if a page size is configured.
    #[must_use]
    pub fn posts_pagination(&self, total_posts: usize) -> Option<Pagination> {
        self.posts_per_page
            .map(|per_page| Pagination::new(total_posts, per_page))
    }

    /// Pagination for project listings, if a page size is configured.
    #[must_use]
    pub fn projects_pagination(&self, total_projects: usize) -> Option<Pagination> {
        self.projects_per_page
            .map(|per_page| Pagination::new(total_projects, per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_config;

    fn eight() -> NonZeroU32 {
        NonZeroU32::new(8).unwrap()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(Pagination::new(17, eight()).page_count(), 3);
        assert_eq!(Pagination::new(16, eight()).page_count(), 2);
        assert_eq!(Pagination::new(1, eight()).page_count(), 1);
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        let pagination = Pagination::new(0, eight());
        assert_eq!(pagination.page_count(), 1);
        assert_eq!(pagination.range(1), Some(0..0));
        assert_eq!(pagination.range(2), None);
    }

    #[test]
    fn test_ranges() {
        let pagination = Pagination::new(17, eight());
        assert_eq!(pagination.range(0), None);
        assert_eq!(pagination.range(1), Some(0..8));
        assert_eq!(pagination.range(2), Some(8..16));
        assert_eq!(pagination.range(3), Some(16..17));
        assert_eq!(pagination.range(4), None);
    }

    #[test]
    fn test_config_pagination() {
        let pagination = site_config().posts_pagination(20).unwrap();
        assert_eq!(pagination.per_page(), 8);
        assert_eq!(pagination.page_count(), 3);
        assert_eq!(site_config().projects_pagination(8).unwrap().page_count(), 1);
    }

    #[test]
    fn test_config_without_page_size() {
        let config = SiteConfig::new("Blog", "A blog");
        assert!(config.posts_pagination(20).is_none());
        assert!(config.projects_pagination(20).is_none());
    }
}
