//! Cookie store capability (the `document.cookie` analog).

use std::collections::BTreeMap;

/// A cookie store seen the way a page script sees it: a raw header to read
/// and a Set-Cookie style string to apply.
pub trait CookieJar {
    /// The raw cookie header: `"a=1; b=2"`. Empty string when the jar is
    /// empty.
    fn header(&self) -> String;

    /// Apply a `"name=value; attr; attr"` cookie string. Only the leading
    /// name=value pair is stored; attributes (path, max-age) are accepted and
    /// ignored, as this model has no expiry clock or path scoping.
    fn apply(&mut self, cookie: &str);
}

/// In-memory jar.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: BTreeMap<String, String>,
}

impl MemoryCookieJar {
    pub fn new() -> MemoryCookieJar {
        MemoryCookieJar::default()
    }

    /// Jar pre-seeded with one cookie, for test setups.
    pub fn with_cookie(name: &str, value: &str) -> MemoryCookieJar {
        let mut jar = MemoryCookieJar::new();
        jar.cookies.insert(name.to_string(), value.to_string());
        jar
    }
}

impl CookieJar for MemoryCookieJar {
    fn header(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn apply(&mut self, cookie: &str) {
        let pair = match cookie.split(';').next() {
            Some(pair) => pair.trim(),
            None => return,
        };

        if let Some((name, value)) = pair.split_once('=') {
            self.cookies
                .insert(name.trim().to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_jar_header() {
        assert_eq!(MemoryCookieJar::new().header(), "");
    }

    #[test]
    fn test_apply_then_header() {
        let mut jar = MemoryCookieJar::new();
        jar.apply("language=ua; path=/; max-age=31536000");
        assert_eq!(jar.header(), "language=ua");
    }

    #[test]
    fn test_apply_overwrites_same_name() {
        let mut jar = MemoryCookieJar::new();
        jar.apply("language=ua");
        jar.apply("language=ru; path=/");
        assert_eq!(jar.header(), "language=ru");
    }

    #[test]
    fn test_header_joins_multiple_cookies() {
        let mut jar = MemoryCookieJar::new();
        jar.apply("language=ua");
        jar.apply("theme=dark");
        // BTreeMap order: name-sorted
        assert_eq!(jar.header(), "language=ua; theme=dark");
    }

    #[test]
    fn test_apply_without_pair_is_ignored() {
        let mut jar = MemoryCookieJar::new();
        jar.apply("garbage");
        jar.apply("");
        assert_eq!(jar.header(), "");
    }

    #[test]
    fn test_with_cookie_seed() {
        let jar = MemoryCookieJar::with_cookie("language", "ru");
        assert_eq!(jar.header(), "language=ru");
    }
}
