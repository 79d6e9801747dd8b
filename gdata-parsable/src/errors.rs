#![allow(missing_docs)] // names should be good enough
//! Parse and serialize errors
//!
//! The set of error kinds is closed; hooks report problems through the helper functions below,
//! which render the location of the offending element for the message.

use crate::{
	path,
	tree::Element,
};
use std::fmt;

/// Everything that can go wrong while mapping between XML and objects
///
/// Unrecognized XML is never an error; it is preserved as extra content instead.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error {
	/// The input wasn't well-formed XML
	#[error("Error parsing XML: {message}")]
	ParsingString { message: String },
	/// The input was well-formed but had no root element
	#[error("Empty document")]
	EmptyDocument,
	/// An expected root or child element never appeared
	#[error("A required element ({path}) was not present")]
	RequiredElementMissing { path: String },
	/// An element was present but its required text content was empty or absent
	#[error("A {path} element's content was not present")]
	RequiredContentMissing { path: String },
	/// A mandatory attribute was absent or empty
	#[error("A required property of a {path} element ({property}) was not present")]
	RequiredPropertyMissing { path: String, property: String },
	/// A singleton element appeared more than once
	#[error("A singleton element ({path}) was duplicated")]
	DuplicateElement { path: String },
	/// An attribute value outside its known set
	#[error("The value of the {property} property of a {path} element ({value:?}) was unknown")]
	UnknownPropertyValue {
		path: String,
		property: String,
		value: String,
	},
	/// Text content that didn't match any accepted form
	#[error("The content of a {path} element ({content:?}) was unknown")]
	UnknownContent { path: String, content: String },
	/// A date/time value that isn't ISO 8601
	#[error("The content of a {path} element ({value:?}) was not in ISO 8601 format")]
	NotIso8601Format { path: String, value: String },
}

impl Error {
	/// Rendered location of the offending element, if the error has one
	pub fn path(&self) -> Option<&str> {
		match self {
			Self::ParsingString { .. } | Self::EmptyDocument => None,
			Self::RequiredElementMissing { path }
			| Self::RequiredContentMissing { path }
			| Self::RequiredPropertyMissing { path, .. }
			| Self::DuplicateElement { path }
			| Self::UnknownPropertyValue { path, .. }
			| Self::UnknownContent { path, .. }
			| Self::NotIso8601Format { path, .. } => Some(path.as_str()),
		}
	}
}

pub fn parsing_string<E: fmt::Display>(error: E) -> Error {
	Error::ParsingString {
		message: error.to_string(),
	}
}

/// `name` (qualified, like `media:title`) was expected inside `parent`
pub fn required_element_missing(parent: &Element, name: &str) -> Error {
	Error::RequiredElementMissing {
		path: path::child_path(parent, name),
	}
}

/// The document root wasn't named `name`
pub fn required_root_missing(name: &str) -> Error {
	Error::RequiredElementMissing {
		path: format!("<{}>", name),
	}
}

pub fn required_content_missing(element: &Element) -> Error {
	Error::RequiredContentMissing {
		path: path::element_path(element),
	}
}

pub fn required_property_missing(element: &Element, property: &str) -> Error {
	Error::RequiredPropertyMissing {
		path: path::element_path(element),
		property: property.into(),
	}
}

pub fn duplicate_element(element: &Element) -> Error {
	Error::DuplicateElement {
		path: path::element_path(element),
	}
}

pub fn unknown_property_value(element: &Element, property: &str, value: &str) -> Error {
	Error::UnknownPropertyValue {
		path: path::element_path(element),
		property: property.into(),
		value: value.into(),
	}
}

pub fn unknown_content(element: &Element, content: &str) -> Error {
	Error::UnknownContent {
		path: path::element_path(element),
		content: content.into(),
	}
}

pub fn not_iso8601_format(element: &Element, value: &str) -> Error {
	Error::NotIso8601Format {
		path: path::element_path(element),
		value: value.into(),
	}
}
