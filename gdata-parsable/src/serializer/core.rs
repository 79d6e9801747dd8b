use crate::{
	namespaces::Namespaces,
	serializer::{
		element::write_element,
		escape::{
			escape_attribute,
			escape_text,
		},
	},
	traits::Parsable,
	Result,
};
use std::fmt;

/// Close the start tag; returns the position of `>` for `end_element`.
pub(super) fn start_content(out: &mut String) -> usize {
	let mark = out.len();
	out.push('>');
	mark
}

/// Close the element; if no content was written since `start_content` it becomes `<name/>`.
pub(super) fn end_element(out: &mut String, mark: usize, name: &str) {
	if out.len() == mark + 1 {
		out.truncate(mark);
		out.push_str("/>");
	} else {
		out.push_str("</");
		out.push_str(name);
		out.push('>');
	}
}

/// Adds attributes to the start tag of the element being serialized.
pub struct AttributeWriter<'a> {
	out: &'a mut String,
}

impl<'a> AttributeWriter<'a> {
	pub(super) fn new(out: &'a mut String) -> Self {
		Self { out }
	}

	/// Add an attribute; the value gets escaped.
	pub fn attribute(&mut self, key: &str, value: &str) {
		self.out.push(' ');
		self.out.push_str(key);
		self.out.push_str("='");
		self.out.push_str(&escape_attribute(value));
		self.out.push('\'');
	}

	/// Add an attribute if there is a value
	pub fn optional_attribute(&mut self, key: &str, value: Option<&str>) {
		if let Some(value) = value {
			self.attribute(key, value);
		}
	}

	/// Add `true` or `false`
	pub fn boolean_attribute(&mut self, key: &str, value: bool) {
		self.attribute(key, if value { "true" } else { "false" });
	}

	/// Add an attribute using the `Display` representation of `value`
	pub fn display_attribute<V: fmt::Display>(&mut self, key: &str, value: &V) {
		self.attribute(key, &value.to_string());
	}
}

/// Adds text and nested elements to the element being serialized.
pub struct ContentWriter<'a> {
	out: &'a mut String,
	namespaces: &'a mut Namespaces,
}

impl<'a> ContentWriter<'a> {
	pub(super) fn new(out: &'a mut String, namespaces: &'a mut Namespaces) -> Self {
		Self { out, namespaces }
	}

	/// Add text; gets escaped.
	pub fn text(&mut self, text: &str) {
		self.out.push_str(&escape_text(text));
	}

	/// Add pre-serialized XML as is
	///
	/// The fragment must be well-formed; prefixes it uses need to be announced with `namespace`
	/// (or a `namespaces` hook).
	pub fn raw(&mut self, xml: &str) {
		self.out.push_str(xml);
	}

	/// Make sure `prefix` gets declared on the root element
	pub fn namespace(&mut self, prefix: &str, uri: &str) {
		self.namespaces.insert(prefix, uri);
	}

	/// Add `<name>text</name>`
	pub fn text_element(&mut self, name: &str, text: &str) {
		self.out.push('<');
		self.out.push_str(name);
		let mark = start_content(self.out);
		self.text(text);
		end_element(self.out, mark, name);
	}

	/// Add `<name>text</name>` if there is a text
	pub fn optional_text_element(&mut self, name: &str, text: Option<&str>) {
		if let Some(text) = text {
			self.text_element(name, text);
		}
	}

	/// Add an element that isn't a `Parsable` type of its own
	///
	/// Becomes `<name/>` if `content` doesn't write anything.
	pub fn child<A, C>(&mut self, name: &str, attributes: A, content: C) -> Result<()>
	where
		A: FnOnce(&mut AttributeWriter<'_>),
		C: FnOnce(&mut ContentWriter<'_>) -> Result<()>,
	{
		self.out.push('<');
		self.out.push_str(name);
		attributes(&mut AttributeWriter::new(&mut *self.out));
		let mark = start_content(self.out);
		content(&mut ContentWriter::new(&mut *self.out, &mut *self.namespaces))?;
		end_element(self.out, mark, name);
		Ok(())
	}

	/// Add a nested object through its own hook chain
	///
	/// Its namespaces get declared on the root element.
	pub fn element<T: Parsable>(&mut self, object: &T) -> Result<()> {
		write_element(self.out, self.namespaces, object, false)
	}

	/// Add all objects in order
	pub fn elements<'o, T, I>(&mut self, objects: I) -> Result<()>
	where
		T: Parsable,
		I: IntoIterator<Item = &'o T>,
	{
		for object in objects {
			self.element(object)?;
		}
		Ok(())
	}
}
