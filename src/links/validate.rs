use url::Url;

use crate::constants::MIN_URL_CHARS;

/// Absolute http(s) URL with a host, longer than the minimum length.
pub fn is_valid_link(candidate: &str) -> bool {
    if candidate.chars().count() <= MIN_URL_CHARS {
        return false;
    }
    match Url::parse(candidate) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}
