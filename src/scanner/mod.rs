pub mod pattern;

/// Byte span of a URL-shaped match inside a scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlMatch {
    pub start: usize,
    pub end: usize,
}

impl UrlMatch {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

pub trait UrlMatcher: Send + Sync {
    /// Leftmost match starting at or after `start`. Bytes before `start` are
    /// still visible to the pattern as context.
    fn find_at(&self, haystack: &[u8], start: usize) -> Option<UrlMatch>;

    fn find_all(&self, haystack: &[u8]) -> Vec<UrlMatch> {
        let mut out = Vec::new();
        let mut pos = 0usize;
        while pos <= haystack.len() {
            let Some(m) = self.find_at(haystack, pos) else {
                break;
            };
            out.push(m);
            pos = if m.is_empty() { m.end + 1 } else { m.end };
        }
        out
    }
}

pub fn build_matcher() -> Result<Box<dyn UrlMatcher>, regex::Error> {
    Ok(Box::new(pattern::RegexUrlMatcher::new()?))
}

/// Raw candidate substrings of `text`, in order of appearance.
pub fn find_candidates<'t>(matcher: &dyn UrlMatcher, text: &'t str) -> Vec<&'t str> {
    matcher
        .find_all(text.as_bytes())
        .into_iter()
        .map(|m| &text[m.start..m.end])
        .collect()
}
