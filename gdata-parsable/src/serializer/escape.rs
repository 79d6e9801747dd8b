use quick_xml::escape::escape;
use std::borrow::Cow;

/// Escape text content: `&`, `<`, `>`, `'` and `"`
pub fn escape_text(text: &str) -> Cow<'_, str> {
	escape(text)
}

/// Escape an attribute value
///
/// Like `escape_text`, but also encodes tab, carriage return and line feed, which attribute value
/// normalization would otherwise turn into spaces.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
	let escaped = escape(value);
	if !escaped.contains(|c: char| matches!(c, '\t' | '\n' | '\r')) {
		return escaped;
	}
	let mut result = String::with_capacity(escaped.len() + 8);
	for c in escaped.chars() {
		match c {
			'\t' => result.push_str("&#9;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			c => result.push(c),
		}
	}
	Cow::Owned(result)
}
