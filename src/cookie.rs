//! Cookie header reading and `Set-Cookie` string formatting.
//!
//! Pure string functions over the raw cookie header (the `document.cookie`
//! analog). Persisted layout: `<key>=<value>; path=/; max-age=31536000`.

/// Read a cookie value from a raw `"a=1; b=2"` cookie header.
///
/// The header is scanned for an exact `"; <name>="` segment boundary; the
/// value runs to the next `;`. A name that appears more than once is treated
/// as unreadable and yields `None`.
pub fn read(header: &str, name: &str) -> Option<String> {
    // Pad so a cookie at the start of the header still hits the delimiter
    let padded = format!("; {}", header);
    let pattern = format!("; {}=", name);

    let parts: Vec<&str> = padded.split(pattern.as_str()).collect();
    if parts.len() != 2 {
        return None;
    }

    let value = parts[1].split(';').next().unwrap_or("");
    Some(value.to_string())
}

/// Format the cookie string the persistence writer applies: root path,
/// one-year expiry.
pub fn set_cookie_value(key: &str, value: &str) -> String {
    format!("{}={}; path=/; max-age={}", key, value, one_year_seconds())
}

/// One year, in seconds (the cookie max-age).
fn one_year_seconds() -> i64 {
    chrono::Duration::days(365).num_seconds()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Read Tests ====================

    #[test]
    fn test_read_single_cookie() {
        assert_eq!(read("language=ua", "language"), Some("ua".to_string()));
    }

    #[test]
    fn test_read_among_other_cookies() {
        let header = "theme=dark; language=ru; session=abc123";
        assert_eq!(read(header, "language"), Some("ru".to_string()));
    }

    #[test]
    fn test_read_at_start_of_header() {
        assert_eq!(
            read("language=ua; theme=dark", "language"),
            Some("ua".to_string())
        );
    }

    #[test]
    fn test_read_at_end_of_header() {
        assert_eq!(
            read("theme=dark; language=ua", "language"),
            Some("ua".to_string())
        );
    }

    #[test]
    fn test_read_missing_name() {
        assert_eq!(read("theme=dark; session=abc", "language"), None);
    }

    #[test]
    fn test_read_empty_header() {
        assert_eq!(read("", "language"), None);
    }

    #[test]
    fn test_read_empty_value() {
        assert_eq!(read("language=", "language"), Some("".to_string()));
        assert_eq!(read("language=; theme=dark", "language"), Some("".to_string()));
    }

    #[test]
    fn test_read_requires_exact_name() {
        // "language" must not match "site-language" or "languages"
        assert_eq!(read("site-language=ua", "language"), None);
        assert_eq!(read("languages=ua", "language"), None);
    }

    #[test]
    fn test_read_duplicate_name_is_unreadable() {
        assert_eq!(read("language=ua; language=ru", "language"), None);
    }

    // ==================== Formatting Tests ====================

    #[test]
    fn test_set_cookie_layout() {
        assert_eq!(
            set_cookie_value("language", "ru"),
            "language=ru; path=/; max-age=31536000"
        );
    }

    #[test]
    fn test_set_cookie_arbitrary_key() {
        assert_eq!(
            set_cookie_value("pref", "ua"),
            "pref=ua; path=/; max-age=31536000"
        );
    }

    #[test]
    fn test_one_year_seconds() {
        assert_eq!(one_year_seconds(), 31_536_000);
    }

    // ==================== Properties ====================

    proptest! {
        /// Any simple key/value written via the formatter reads back intact,
        /// regardless of surrounding cookies.
        #[test]
        fn prop_write_then_read_roundtrip(
            key in "[a-zA-Z][a-zA-Z0-9_-]{0,15}",
            value in "[a-zA-Z0-9_-]{0,16}",
        ) {
            prop_assume!(key != "theme" && key != "session");
            let set = set_cookie_value(&key, &value);
            // A jar stores only the name=value pair from the Set-Cookie string
            let pair = set.split(';').next().unwrap_or("");
            let header = format!("theme=dark; {}; session=xyz", pair);
            prop_assert_eq!(read(&header, &key), Some(value));
        }

        /// Reading never panics on arbitrary headers.
        #[test]
        fn prop_read_never_panics(header in ".{0,64}", name in "[a-z]{1,8}") {
            let _ = read(&header, &name);
        }
    }
}
