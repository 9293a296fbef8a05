//! # Catalog
//!
//! Foreground view over a completed scan: category filtering and paging.
//! The result set is replaced wholesale on every scan and never mutated here.

pub mod filter;
pub mod paginate;

use std::fmt;

use crate::links::{Category, Link, ResultSet};

pub use filter::{FilterConfig, apply_filter};
pub use paginate::{
    CapacityError, NavigationError, PageSelection, Paginator, capacity_for_viewport,
    parse_page_input, total_pages,
};

/// One row of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord<'a> {
    pub url: &'a str,
    pub category: Category,
    pub label: &'static str,
    pub action: &'static str,
}

impl<'a> From<&'a Link> for PageRecord<'a> {
    fn from(link: &'a Link) -> Self {
        Self {
            url: &link.url,
            category: link.category,
            label: link.category.label(),
            action: link.category.action_hint(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub number: usize,
    pub capacity: usize,
    pub total_pages: usize,
    pub records: Vec<PageRecord<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub page: usize,
    pub total_pages: usize,
    pub filtered: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {} / {} | {} links",
            self.page, self.total_pages, self.filtered
        )
    }
}

pub struct Catalog {
    results: ResultSet,
    filter: FilterConfig,
    filtered: Vec<usize>,
    capacity: usize,
    current: usize,
}

impl Catalog {
    pub fn new(filter: FilterConfig, capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }
        Ok(Self {
            results: ResultSet::default(),
            filter,
            filtered: Vec::new(),
            capacity,
            current: 1,
        })
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn filter(&self) -> FilterConfig {
        self.filter
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Swaps in the result set of a newly completed scan.
    pub fn replace_results(&mut self, results: ResultSet) {
        self.results = results;
        self.refilter();
        self.current = 1;
    }

    pub fn set_filter(&mut self, filter: FilterConfig) {
        self.filter = filter;
        self.refilter();
        self.current = 1;
    }

    /// Changes rows per page, keeping the current page when it still exists.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::Zero);
        }
        self.capacity = capacity;
        self.current = self.current.clamp(1, self.total_pages());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.replace_results(ResultSet::default());
    }

    fn refilter(&mut self) {
        self.filtered = filter::filtered_indices(&self.results, &self.filter);
    }

    fn paginator(&self) -> Paginator {
        Paginator::with_capacity(self.filtered.len(), self.capacity)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Link> + '_ {
        self.filtered
            .iter()
            .filter_map(|&idx| self.results.get(idx))
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.capacity)
    }

    pub fn goto(&mut self, page: i64) -> PageSelection {
        let selection = self.paginator().goto(page);
        self.current = selection.page;
        selection
    }

    /// Next page; stays put and reports `clamped` on the last page.
    pub fn next_page(&mut self) -> PageSelection {
        let target = i64::try_from(self.current).unwrap_or(i64::MAX).saturating_add(1);
        self.goto(target)
    }

    /// Previous page; stays put and reports `clamped` on the first page.
    pub fn prev_page(&mut self) -> PageSelection {
        let target = i64::try_from(self.current).unwrap_or(i64::MAX) - 1;
        self.goto(target)
    }

    /// Jump to a page typed by the user.
    pub fn jump(&mut self, text: &str) -> Result<PageSelection, NavigationError> {
        let page = parse_page_input(text)?;
        Ok(self.goto(page))
    }

    pub fn page(&self) -> Page<'_> {
        let pager = self.paginator();
        let records = self.filtered[pager.range(self.current)]
            .iter()
            .filter_map(|&idx| self.results.get(idx))
            .map(PageRecord::from)
            .collect();
        Page {
            number: self.current,
            capacity: self.capacity,
            total_pages: pager.total_pages(),
            records,
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            page: self.current,
            total_pages: self.total_pages(),
            filtered: self.filtered.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_images() -> ResultSet {
        ResultSet::from_unique((0..10).map(|i| format!("https://img.example.com/{i:02}.png")))
    }

    fn page_urls(catalog: &Catalog) -> Vec<String> {
        catalog
            .page()
            .records
            .iter()
            .map(|r| r.url.to_string())
            .collect()
    }

    #[test]
    fn ten_links_four_per_page() {
        let mut catalog = Catalog::new(FilterConfig::default(), 4).expect("catalog");
        catalog.replace_results(ten_images());
        assert_eq!(catalog.total_pages(), 3);
        assert_eq!(page_urls(&catalog).len(), 4);
        assert!(page_urls(&catalog)[0].ends_with("/00.png"));

        catalog.goto(2);
        let second = page_urls(&catalog);
        assert!(second[0].ends_with("/04.png"));
        assert!(second[3].ends_with("/07.png"));

        catalog.goto(3);
        let third = page_urls(&catalog);
        assert_eq!(third.len(), 2);
        assert!(third[1].ends_with("/09.png"));
    }

    #[test]
    fn next_and_prev_stop_at_edges() {
        let mut catalog = Catalog::new(FilterConfig::default(), 4).expect("catalog");
        catalog.replace_results(ten_images());
        assert!(catalog.prev_page().clamped);
        assert_eq!(catalog.current_page(), 1);
        assert!(!catalog.next_page().clamped);
        assert!(!catalog.next_page().clamped);
        assert!(catalog.next_page().clamped);
        assert_eq!(catalog.current_page(), 3);
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let mut catalog = Catalog::new(FilterConfig::default(), 2).expect("catalog");
        catalog.replace_results(ResultSet::from_unique(vec![
            "https://a.example.com/1.png".to_string(),
            "https://a.example.com/2.png".to_string(),
            "https://a.example.com/3.mp4".to_string(),
            "https://a.example.com/4.txt".to_string(),
        ]));
        catalog.goto(2);
        assert_eq!(catalog.current_page(), 2);

        catalog.set_filter(FilterConfig {
            image: false,
            video: true,
            other: true,
        });
        assert_eq!(catalog.current_page(), 1);
        assert_eq!(catalog.filtered_len(), 2);
        assert_eq!(catalog.results().len(), 4);
        assert_eq!(
            page_urls(&catalog),
            vec!["https://a.example.com/3.mp4", "https://a.example.com/4.txt"]
        );
    }

    #[test]
    fn capacity_change_keeps_page_in_range() {
        let mut catalog = Catalog::new(FilterConfig::default(), 2).expect("catalog");
        catalog.replace_results(ten_images());
        catalog.goto(5);
        catalog.set_capacity(3).expect("capacity");
        assert_eq!(catalog.current_page(), 4);
        catalog.set_capacity(20).expect("capacity");
        assert_eq!(catalog.current_page(), 1);
        assert_eq!(catalog.set_capacity(0), Err(CapacityError::Zero));
    }

    #[test]
    fn jump_rejects_non_numbers_and_clamps_numbers() {
        let mut catalog = Catalog::new(FilterConfig::default(), 4).expect("catalog");
        catalog.replace_results(ten_images());
        assert!(catalog.jump("abc").is_err());
        assert_eq!(catalog.current_page(), 1);
        let selection = catalog.jump("40").expect("jump");
        assert!(selection.clamped);
        assert_eq!(selection.page, 3);
    }

    #[test]
    fn summary_and_records() {
        let mut catalog = Catalog::new(FilterConfig::default(), 8).expect("catalog");
        assert_eq!(catalog.summary().to_string(), "page 1 / 1 | 0 links");
        catalog.replace_results(ResultSet::from_unique(vec![
            "https://a.example.com/v.mkv".to_string(),
        ]));
        let page = catalog.page();
        assert_eq!(page.records[0].label, "Video");
        assert_eq!(page.records[0].action, "double-click to play");
        catalog.clear();
        assert_eq!(catalog.filtered_len(), 0);
    }
}
