use serde::Deserialize;

use crate::links::{Category, Link, ResultSet};

/// Which categories are currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "enabled")]
    pub image: bool,
    #[serde(default = "enabled")]
    pub video: bool,
    #[serde(default = "enabled")]
    pub other: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            image: true,
            video: true,
            other: true,
        }
    }
}

impl FilterConfig {
    pub fn allows(&self, category: Category) -> bool {
        match category {
            Category::Image => self.image,
            Category::Video => self.video,
            Category::Other => self.other,
        }
    }
}

/// Links whose category is enabled, in result-set order.
pub fn apply_filter<'a>(results: &'a ResultSet, filter: &FilterConfig) -> Vec<&'a Link> {
    results
        .iter()
        .filter(|link| filter.allows(link.category))
        .collect()
}

/// Same selection as [`apply_filter`], as indices into the result set.
pub fn filtered_indices(results: &ResultSet, filter: &FilterConfig) -> Vec<usize> {
    results
        .iter()
        .enumerate()
        .filter(|(_, link)| filter.allows(link.category))
        .map(|(idx, _)| idx)
        .collect()
}
