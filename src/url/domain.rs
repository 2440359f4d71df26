use url::Url;

/// Extracts the lowercase host of a URL
///
/// The port is not part of the result, so `https://example.com:8080/` and
/// `https://example.com/` share the host `example.com`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use lexicrawl::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}
