//! URL validation for link fields pushed into rendered markup

use url::Url;

/// Check that the input parses as an absolute `http` or `https` URL.
///
/// Surrounding whitespace is trimmed before parsing, matching what users
/// paste into a text field. Relative references and every other scheme
/// (`ftp`, `javascript`, `mailto`, ...) are rejected.
///
/// # Examples
///
/// ```
/// use blockform::is_valid_http_url;
///
/// assert!(is_valid_http_url("https://example.com"));
/// assert!(is_valid_http_url("  http://example.com/path?q=1  "));
/// assert!(!is_valid_http_url("ftp://example.com"));
/// assert!(!is_valid_http_url("javascript:alert(1)"));
/// assert!(!is_valid_http_url("not a url"));
/// assert!(!is_valid_http_url(""));
/// ```
pub fn is_valid_http_url(input: &str) -> bool {
	match Url::parse(input.trim()) {
		Ok(url) => matches!(url.scheme(), "http" | "https"),
		Err(_) => false,
	}
}
