use serde::{Deserialize, Serialize};

/// One page of an in-memory filtered collection. `total_count` and
/// `total_pages` always describe the whole filtered set, even when the
/// requested page lies past the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Slices `[(page - 1) * page_size, page * page_size)` out of an already
/// filtered and sorted collection. Pages are 1-based.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);

    let items = if start >= total_count {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect()
    };

    Page {
        items,
        total_count,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_yields_zero_counts() {
        let page = paginate(Vec::<u32>::new(), 1, 10);
        assert_eq!(page.items, Vec::<u32>::new());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn total_pages_is_ceiling_of_count_over_size() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(items, 1, 10);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn concatenating_pages_reproduces_the_filtered_set() {
        let items: Vec<u32> = (0..23).collect();
        let mut seen = Vec::new();
        for page_number in 1..=3 {
            seen.extend(paginate(items.clone(), page_number, 10).items);
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn page_beyond_range_is_empty_but_counts_are_real() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(items, 4, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (0..20).collect();
        let page = paginate(items, 1, 10);
        assert_eq!(page.total_pages, 2);
    }
}
