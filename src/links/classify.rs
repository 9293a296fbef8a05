use url::Url;

use crate::constants::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::links::Category;

/// Lower-cased extension of the URL's path, or an empty string.
///
/// Falls back to the whole string when the URL does not parse, in which case
/// any query or fragment picked up after the last dot is cut off.
pub fn extension(url: &str) -> String {
    let ext = match Url::parse(url) {
        Ok(parsed) => after_last_dot(parsed.path()).to_lowercase(),
        Err(_) => after_last_dot(url).to_lowercase(),
    };
    let ext = ext.split('?').next().unwrap_or_default();
    ext.split('#').next().unwrap_or_default().to_string()
}

fn after_last_dot(s: &str) -> &str {
    match s.rfind('.') {
        Some(pos) => &s[pos + 1..],
        None => "",
    }
}

pub fn category_for_extension(ext: &str) -> Category {
    if IMAGE_EXTENSIONS.contains(&ext) {
        Category::Image
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        Category::Video
    } else {
        Category::Other
    }
}

pub fn classify(url: &str) -> Category {
    category_for_extension(&extension(url))
}
