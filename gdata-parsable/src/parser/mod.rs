//! Parse XML trees into objects through their hook chain
//!
//! `parse_document` reads a whole document and checks the name of the root element; hooks use
//! `parse_element` (or `object_from_element` / `objects_from_element`) for nested objects.
//!
//! The `*_from_element` and `*_from_property` helpers cover the usual shapes of GData elements:
//! singleton text elements, timestamps, `true` / `false` flags and required attributes. They
//! produce errors naming the element path (`<entry/author/name>`).

mod core;
mod fields;
mod options;

pub use self::{
	core::{
		parse_document,
		parse_element,
	},
	fields::{
		boolean_from_property,
		object_from_element,
		objects_from_element,
		required_element,
		required_property,
		string_from_element,
		timestamp_from_element,
		timestamp_from_property,
		value_from_content,
		value_from_property,
	},
	options::ParserOptions,
};
