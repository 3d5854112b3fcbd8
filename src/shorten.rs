const DEFAULT_SCHEME: &str = "http://";

/// Prefixes `http://` when no scheme separator appears before the first
/// path component.
pub fn canonicalize_long_url(long_url: &str) -> String {
    let authority = long_url.split('/').next().unwrap_or_default();
    if authority.contains(':') {
        long_url.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{long_url}")
    }
}

/// Public address of a short code on the backend.
pub fn short_url(base_url: &str, short: &str) -> String {
    format!("{base_url}{short}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_http_scheme() {
        assert_eq!(canonicalize_long_url("example.com"), "http://example.com");
        assert_eq!(
            canonicalize_long_url("example.com/a/b?q=1"),
            "http://example.com/a/b?q=1"
        );
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(canonicalize_long_url("https://example.com"), "https://example.com");
        assert_eq!(canonicalize_long_url("ftp://files.example.com/x"), "ftp://files.example.com/x");
        assert_eq!(canonicalize_long_url("mailto:someone@example.com"), "mailto:someone@example.com");
    }

    #[test]
    fn colon_inside_path_does_not_count_as_scheme() {
        assert_eq!(
            canonicalize_long_url("example.com/wiki/Help:Contents"),
            "http://example.com/wiki/Help:Contents"
        );
    }

    #[test]
    fn host_with_port_is_kept() {
        assert_eq!(canonicalize_long_url("localhost:3000/x"), "localhost:3000/x");
    }

    #[test]
    fn short_url_joins_base_and_code() {
        assert_eq!(short_url("http://localhost:8080/", "xyz"), "http://localhost:8080/xyz");
    }
}
