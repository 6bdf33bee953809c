// src/services/paginator.rs

//! Pure pagination over the extracted service list.

use crate::models::{Page, ServiceEntry};

/// Default page size when the request carries none or garbage.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound on requested page size.
pub const MAX_PAGE_SIZE: usize = 100;

/// Parse a raw `page_size` query value, clamping to `[1, MAX_PAGE_SIZE]`.
///
/// Unparsable or non-positive input silently falls back to
/// [`DEFAULT_PAGE_SIZE`].
pub fn parse_page_size(raw: &str) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => n.min(MAX_PAGE_SIZE),
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Parse a raw `page` query value. Unparsable input falls back to 1.
pub fn parse_page_number(raw: &str) -> usize {
    raw.trim().parse::<usize>().unwrap_or(1).max(1)
}

/// Slice `items` into the requested page.
///
/// There is always at least one page: an empty list yields one empty
/// page. A page number beyond the last clamps to the last page.
pub fn paginate(items: &[ServiceEntry], page: usize, page_size: usize) -> Page {
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page_number = page.clamp(1, total_pages);

    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let page_items = if start < total_items {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: page_items,
        page_number,
        page_size,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Vec<ServiceEntry> {
        (0..n)
            .map(|i| ServiceEntry::new(format!("Service {i}"), format!("https://x.edu/{i}")))
            .collect()
    }

    #[test]
    fn test_pages_partition_items() {
        let items = sample(47);
        for page_size in [1, 7, 20, 100] {
            let first = paginate(&items, 1, page_size);
            let mut seen = 0;
            for page in 1..=first.total_pages {
                seen += paginate(&items, page, page_size).items.len();
            }
            assert_eq!(seen, items.len(), "page_size={page_size}");
        }
    }

    #[test]
    fn test_page_beyond_last_clamps() {
        let items = sample(45);
        let page = paginate(&items, 999, 20);
        assert_eq!(page.page_number, 3);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].name, "Service 40");
    }

    #[test]
    fn test_empty_list_yields_one_empty_page() {
        let page = paginate(&[], 1, 20);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_number, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let items = sample(41);
        assert_eq!(paginate(&items, 1, 20).total_pages, 3);
        assert_eq!(paginate(&items, 1, 41).total_pages, 1);
    }

    #[test]
    fn test_page_size_zero_behaves_as_one() {
        let items = sample(5);
        let page = paginate(&items, 1, 0);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("20"), 20);
        assert_eq!(parse_page_size("1"), 1);
        assert_eq!(parse_page_size("0"), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size("500"), 100);
        assert_eq!(parse_page_size("abc"), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size(""), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size("-3"), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_parse_page_number() {
        assert_eq!(parse_page_number("4"), 4);
        assert_eq!(parse_page_number("garbage"), 1);
        assert_eq!(parse_page_number("0"), 1);
    }
}
