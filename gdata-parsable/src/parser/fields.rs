//! Helpers for hooks to pull values out of elements and attributes
//!
//! The `*_from_element` functions return `Ok(false)` if the element doesn't have the expected
//! (local) name, so a `parse_child` hook can try them one after another. Checking the namespace
//! is up to the caller (see `Element::is_namespace`).

use crate::{
	errors,
	parser::{
		parse_element,
		ParserOptions,
	},
	timestamp::Timestamp,
	traits::Parsable,
	tree::Element,
	Result,
};
use std::str::FromStr;

fn content(element: &Element, options: ParserOptions) -> Result<Option<String>> {
	let text = element.text();
	let missing = match &text {
		None => options.intersects(ParserOptions::REQUIRED | ParserOptions::NON_EMPTY),
		Some(text) => options.contains(ParserOptions::NON_EMPTY) && text.trim().is_empty(),
	};
	if missing {
		return Err(errors::required_content_missing(element));
	}
	Ok(text)
}

/// Store the text content of an element named `name` in `output`
///
/// A matched element always leaves `Some(..)` behind (empty text for an empty element), so
/// `NO_DUPES` catches a second occurrence even if the first one was empty.
pub fn string_from_element(
	element: &Element,
	name: &str,
	options: ParserOptions,
	output: &mut Option<String>,
) -> Result<bool> {
	if element.local_name() != name {
		return Ok(false);
	}
	if options.contains(ParserOptions::NO_DUPES) && output.is_some() {
		return Err(errors::duplicate_element(element));
	}
	*output = Some(content(element, options)?.unwrap_or_default());
	Ok(true)
}

/// Store the ISO 8601 timestamp in the text content of an element named `name` in `output`
///
/// Surrounding whitespace is not part of the timestamp. Empty content is not a timestamp either.
/// With `IGNORE_ERROR` an unparsable occurrence is skipped as if it wasn't there, leaving
/// `output` untouched.
pub fn timestamp_from_element(
	element: &Element,
	name: &str,
	options: ParserOptions,
	output: &mut Option<Timestamp>,
) -> Result<bool> {
	if element.local_name() != name {
		return Ok(false);
	}
	if options.contains(ParserOptions::NO_DUPES) && output.is_some() {
		return Err(errors::duplicate_element(element));
	}
	let text = content(element, options)?.unwrap_or_default();
	let literal = text.trim();
	match Timestamp::parse(literal) {
		Ok(timestamp) => *output = Some(timestamp),
		Err(_) if options.contains(ParserOptions::IGNORE_ERROR) => (),
		Err(_) => return Err(errors::not_iso8601_format(element, literal)),
	}
	Ok(true)
}

/// Parse a nested object if the element has `U`'s element name
pub fn object_from_element<U: Parsable>(
	element: &Element,
	options: ParserOptions,
	output: &mut Option<U>,
) -> Result<bool> {
	if element.local_name() != U::descriptor().element_name {
		return Ok(false);
	}
	if options.contains(ParserOptions::NO_DUPES) && output.is_some() {
		return Err(errors::duplicate_element(element));
	}
	*output = Some(parse_element(element)?);
	Ok(true)
}

/// Parse a nested object if the element has `U`'s element name and append it
pub fn objects_from_element<U: Parsable>(element: &Element, output: &mut Vec<U>) -> Result<bool> {
	if element.local_name() != U::descriptor().element_name {
		return Ok(false);
	}
	output.push(parse_element(element)?);
	Ok(true)
}

/// Get an attribute which must be present and not empty
pub fn required_property<'e>(element: &'e Element, property: &str) -> Result<&'e str> {
	match element.attribute(property) {
		Some(value) if !value.is_empty() => Ok(value),
		_ => Err(errors::required_property_missing(element, property)),
	}
}

/// Parse a `true` / `false` attribute
///
/// A missing attribute results in `default`, or fails if there is no default.
pub fn boolean_from_property(element: &Element, property: &str, default: Option<bool>) -> Result<bool> {
	match element.attribute(property) {
		None => default.ok_or_else(|| errors::required_property_missing(element, property)),
		Some("true") => Ok(true),
		Some("false") => Ok(false),
		Some(value) => Err(errors::unknown_property_value(element, property, value)),
	}
}

/// Parse an optional attribute with `FromStr`
pub fn value_from_property<V: FromStr>(element: &Element, property: &str) -> Result<Option<V>> {
	match element.attribute(property) {
		None => Ok(None),
		Some(value) => match value.parse() {
			Ok(value) => Ok(Some(value)),
			Err(_) => Err(errors::unknown_property_value(element, property, value)),
		},
	}
}

/// Parse an optional ISO 8601 attribute
pub fn timestamp_from_property(element: &Element, property: &str) -> Result<Option<Timestamp>> {
	match element.attribute(property) {
		None => Ok(None),
		Some(value) => match Timestamp::parse(value) {
			Ok(timestamp) => Ok(Some(timestamp)),
			Err(_) => Err(errors::not_iso8601_format(element, value)),
		},
	}
}

/// Parse the (trimmed) text content with `FromStr`; it must be present.
pub fn value_from_content<V: FromStr>(element: &Element) -> Result<V> {
	let text = content(element, ParserOptions::NON_EMPTY)?.unwrap_or_default();
	text.trim()
		.parse()
		.map_err(|_| errors::unknown_content(element, &text))
}

/// For `post_parse` hooks: fail unless a child `name` of `root` was seen
pub fn required_element<'v, V>(value: &'v Option<V>, root: &Element, name: &str) -> Result<&'v V> {
	value
		.as_ref()
		.ok_or_else(|| errors::required_element_missing(root, name))
}
