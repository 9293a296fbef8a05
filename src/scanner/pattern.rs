use memchr::memmem;
use regex::bytes::{Regex, RegexBuilder};

use crate::scanner::{UrlMatch, UrlMatcher};

/// http(s) scheme, optional `www.`, host, short TLD-like suffix, then any
/// run of path/query/fragment characters. ASCII only.
pub const URL_PATTERN: &str = r"https?://(?:www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_\+.~#?&/=]*)";

pub struct RegexUrlMatcher {
    regex: Regex,
    separator: memmem::Finder<'static>,
}

impl RegexUrlMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(URL_PATTERN)
            .case_insensitive(true)
            .unicode(false)
            .build()?;
        Ok(Self {
            regex,
            separator: memmem::Finder::new(b"://"),
        })
    }
}

impl UrlMatcher for RegexUrlMatcher {
    fn find_at(&self, haystack: &[u8], start: usize) -> Option<UrlMatch> {
        if start >= haystack.len() {
            return None;
        }
        // Cache blocks are mostly binary; skip the regex when no scheme separator remains.
        self.separator.find(&haystack[start..])?;
        self.regex.find_at(haystack, start).map(|m| UrlMatch {
            start: m.start(),
            end: m.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::find_candidates;

    fn matcher() -> RegexUrlMatcher {
        RegexUrlMatcher::new().expect("pattern")
    }

    #[test]
    fn finds_urls_in_order() {
        let text = "See https://cdn.example.com/img/a.png?ver=1 and http://www.example.org/v.mp4 here.";
        let found = find_candidates(&matcher(), text);
        assert_eq!(
            found,
            vec![
                "https://cdn.example.com/img/a.png?ver=1",
                "http://www.example.org/v.mp4"
            ]
        );
    }

    #[test]
    fn scheme_is_case_insensitive_and_passed_through() {
        let found = find_candidates(&matcher(), "x HTTPS://Example.COM/Pic.JPG y");
        assert_eq!(found, vec!["HTTPS://Example.COM/Pic.JPG"]);
    }

    #[test]
    fn ignores_other_schemes() {
        let found = find_candidates(&matcher(), "ftp://example.com/a.png file://x.y");
        assert!(found.is_empty());
    }

    #[test]
    fn stops_at_binary_bytes() {
        let data = b"\x00\x01https://a.example.com/x.webp\xff\xfe\x00";
        let m = matcher();
        let hits = m.find_all(data);
        assert_eq!(hits.len(), 1);
        assert_eq!(&data[hits[0].start..hits[0].end], b"https://a.example.com/x.webp");
    }

    #[test]
    fn find_at_respects_start() {
        let data = b"http://one.example.com http://two.example.com";
        let m = matcher();
        let second = m.find_at(data, 1).expect("second match");
        assert_eq!(&data[second.start..second.end], b"http://two.example.com");
        assert!(m.find_at(data, data.len()).is_none());
    }

    #[test]
    fn non_ascii_after_tld_counts_as_boundary() {
        let found = find_candidates(&matcher(), "x https://a.com中 y");
        assert_eq!(found, vec!["https://a.com"]);
    }
}
