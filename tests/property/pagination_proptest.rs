//! Property-based tests for pagination

use inkpost::backend::posts::pagination::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_total_pages_covers_every_post(total in 0u64..10_000, page in 1u32..500, limit in 1u32..=100) {
        let pagination = Pagination::new(page, limit);
        let pages = pagination.total_pages(total);

        prop_assert!(pages * u64::from(limit) >= total);
        prop_assert!(pages == 0 || (pages - 1) * u64::from(limit) < total);
    }

    #[test]
    fn test_offset_skips_previous_pages(page in 1u32..10_000, limit in 1u32..=100) {
        let pagination = Pagination::new(page, limit);
        prop_assert_eq!(pagination.offset(), u64::from(page - 1) * u64::from(limit));
    }

    #[test]
    fn test_limit_never_exceeds_cap(limit in any::<u32>()) {
        let pagination = Pagination::new(1, limit);
        prop_assert!(pagination.limit() >= 1);
        prop_assert!(pagination.limit() <= MAX_LIMIT);
    }

    #[test]
    fn test_non_numeric_query_falls_back(page in "[a-z]{1,8}", limit in "-[0-9]{1,4}") {
        let pagination = Pagination::from_query(Some(&page), Some(&limit));
        prop_assert_eq!(pagination.page(), DEFAULT_PAGE);
        prop_assert_eq!(pagination.limit(), DEFAULT_LIMIT);
    }
}
