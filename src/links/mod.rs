//! # Links
//!
//! Validation, de-duplication, classification and ordering of the URLs a scan
//! turns up.

pub mod classify;
pub mod dedup;
pub mod validate;

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

pub use classify::{classify, extension};
pub use dedup::Deduplicator;
pub use validate::is_valid_link;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Image,
    Video,
    Other,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Image, Category::Video, Category::Other];

    /// Sort rank: images first, then videos, then everything else.
    pub fn rank(self) -> u8 {
        match self {
            Category::Image => 0,
            Category::Video => 1,
            Category::Other => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Image => "Image",
            Category::Video => "Video",
            Category::Other => "Other",
        }
    }

    pub fn action_hint(self) -> &'static str {
        match self {
            Category::Image => "double-click to preview",
            Category::Video => "double-click to play",
            Category::Other => "no action",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
    pub extension: String,
    pub category: Category,
}

impl Link {
    pub fn new(url: String) -> Self {
        let extension = extension(&url);
        let category = classify::category_for_extension(&extension);
        Self {
            url,
            extension,
            category,
        }
    }
}

/// Total order over links: category rank, then the URL string.
pub fn compare_links(a: &Link, b: &Link) -> Ordering {
    a.category
        .rank()
        .cmp(&b.category.rank())
        .then_with(|| a.url.cmp(&b.url))
}

/// All unique links of a completed scan, in a deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    links: Vec<Link>,
}

impl ResultSet {
    /// Classifies and orders a set of unique URLs. Input order is irrelevant.
    pub fn from_unique<I>(urls: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut links: Vec<Link> = urls.into_iter().map(Link::new).collect();
        links.sort_unstable_by(compare_links);
        links.dedup_by(|a, b| a.url == b.url);
        Self { links }
    }

    pub fn from_deduplicator(dedup: Deduplicator) -> Self {
        Self::from_unique(dedup.into_unique())
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Link> {
        self.links.get(index)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        self.links.iter().filter(|l| l.category == category).count()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(set: &ResultSet) -> Vec<&str> {
        set.iter().map(|l| l.url.as_str()).collect()
    }

    #[test]
    fn orders_by_category_then_url() {
        let set = ResultSet::from_unique(vec![
            "https://z.example.com/page".to_string(),
            "https://b.example.com/clip.mp4".to_string(),
            "https://c.example.com/pic.png".to_string(),
            "https://a.example.com/pic.gif".to_string(),
            "https://a.example.com/clip.webm".to_string(),
        ]);
        assert_eq!(
            urls(&set),
            vec![
                "https://a.example.com/pic.gif",
                "https://c.example.com/pic.png",
                "https://a.example.com/clip.webm",
                "https://b.example.com/clip.mp4",
                "https://z.example.com/page",
            ]
        );
        assert_eq!(set.count(Category::Image), 2);
        assert_eq!(set.count(Category::Video), 2);
        assert_eq!(set.count(Category::Other), 1);
    }

    #[test]
    fn order_is_independent_of_input_order() {
        let input = vec![
            "https://x.example.com/1.jpg".to_string(),
            "https://x.example.com/2.mkv".to_string(),
            "https://x.example.com/3".to_string(),
            "https://x.example.com/0.jpg".to_string(),
        ];
        let mut reversed = input.clone();
        reversed.reverse();
        assert_eq!(
            ResultSet::from_unique(input),
            ResultSet::from_unique(reversed)
        );
    }

    #[test]
    fn repeated_urls_collapse() {
        let set = ResultSet::from_unique(vec![
            "https://x.example.com/a.png".to_string(),
            "https://x.example.com/a.png".to_string(),
        ]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn link_serializes_lowercase_category() {
        let link = Link::new("https://x.example.com/a.MP4".to_string());
        let json = serde_json::to_string(&link).expect("json");
        assert!(json.contains("\"category\":\"video\""));
        assert!(json.contains("\"extension\":\"mp4\""));
    }
}
