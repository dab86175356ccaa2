//! Turn a page range or an item count into a page plan.
//!
//! A [`PagePlan`] maps page numbers to the number of items requested on that
//! page. Pages iterate in ascending order so fetch order is deterministic.

use std::collections::BTreeMap;

/// The most items the rolling-news API returns per page.
pub const MAX_PER_PAGE: u32 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePlan {
    pages: BTreeMap<u32, u32>,
}

impl PagePlan {
    /// Pages `from..to` (end exclusive), each at [`MAX_PER_PAGE`].
    ///
    /// An empty or inverted range yields an empty plan.
    pub fn by_range(from: u32, to: u32) -> Self {
        let pages = (from..to).map(|page| (page, MAX_PER_PAGE)).collect();
        Self { pages }
    }

    /// Full pages from page 1 followed by one partial page for the remainder.
    pub fn by_count(count: u32) -> Self {
        let full = count / MAX_PER_PAGE;
        let rest = count % MAX_PER_PAGE;

        let mut pages: BTreeMap<u32, u32> = (1..=full).map(|page| (page, MAX_PER_PAGE)).collect();
        if rest != 0 {
            pages.insert(full + 1, rest);
        }
        Self { pages }
    }

    /// `(page, items)` pairs in ascending page order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.pages.iter().map(|(&page, &items)| (page, items))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total items requested across all pages.
    pub fn total_items(&self) -> u32 {
        self.pages.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_count_with_remainder() {
        let plan = PagePlan::by_count(120);
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![(1, 50), (2, 50), (3, 20)]);
        assert_eq!(plan.total_items(), 120);
    }

    #[test]
    fn test_by_count_exact_multiple_has_no_partial_page() {
        let plan = PagePlan::by_count(100);
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![(1, 50), (2, 50)]);
    }

    #[test]
    fn test_by_count_below_one_page() {
        assert_eq!(PagePlan::by_count(3).iter().collect::<Vec<_>>(), vec![(1, 3)]);
        assert!(PagePlan::by_count(0).is_empty());
    }

    #[test]
    fn test_by_count_page_count_and_last_page() {
        for count in 1..=260u32 {
            let plan = PagePlan::by_count(count);
            let expected_pages = count.div_ceil(MAX_PER_PAGE) as usize;
            assert_eq!(plan.len(), expected_pages, "count={count}");

            let (_, last) = plan.iter().last().unwrap();
            let expected_last = match count % MAX_PER_PAGE {
                0 => MAX_PER_PAGE,
                rest => rest,
            };
            assert_eq!(last, expected_last, "count={count}");
            assert_eq!(plan.total_items(), count);
        }
    }

    #[test]
    fn test_by_range_end_is_exclusive() {
        let plan = PagePlan::by_range(3, 6);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.iter().collect::<Vec<_>>(), vec![(3, 50), (4, 50), (5, 50)]);
    }

    #[test]
    fn test_by_range_single_page() {
        assert_eq!(PagePlan::by_range(1, 2).iter().collect::<Vec<_>>(), vec![(1, 50)]);
    }

    #[test]
    fn test_by_range_empty_or_inverted() {
        assert!(PagePlan::by_range(4, 4).is_empty());
        assert!(PagePlan::by_range(5, 2).is_empty());
    }
}
