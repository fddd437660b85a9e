//! HTML escaping for values interpolated into rendered block markup

/// Escape HTML special characters
///
/// Single pass over the input: `&` produced by an earlier replacement is
/// never rescanned, so each special character maps to exactly one entity.
/// Applying the function to its own output double-encodes.
///
/// # Examples
///
/// ```
/// use blockform::escape_html;
///
/// assert_eq!(escape_html("Hello, World!"), "Hello, World!");
/// assert_eq!(escape_html("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#039;XSS&#039;)&lt;/script&gt;");
/// assert_eq!(escape_html("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape_html(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#039;"),
			_ => result.push(ch),
		}
	}
	result
}
