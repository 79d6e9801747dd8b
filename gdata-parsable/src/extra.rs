//! Preserve XML no hook recognized, so it survives a parse/serialize round trip

use crate::{
	namespaces::{
		Namespaces,
		ATOM_NAMESPACE,
	},
	serializer::{
		escape_attribute,
		escape_text,
	},
	tree::{
		Element,
		Node,
	},
};

/// Unrecognized children of a parsed element, in document order, and the namespaces they need
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ExtraContent {
	xml: Vec<String>,
	namespaces: Namespaces,
}

impl ExtraContent {
	/// Serialized fragments, one per unrecognized child
	pub fn xml(&self) -> &[String] {
		&self.xml
	}

	/// Namespace bindings used by (or in scope on) the fragments
	pub fn namespaces(&self) -> &Namespaces {
		&self.namespaces
	}

	/// Whether nothing was preserved
	pub fn is_empty(&self) -> bool {
		self.xml.is_empty() && self.namespaces.is_empty()
	}

	/// Append a fragment; it is written back verbatim after all recognized content.
	pub fn push(&mut self, fragment: String, namespaces: Namespaces) {
		self.xml.push(fragment);
		self.namespaces.merge(&namespaces);
	}

	/// Drop everything preserved
	pub fn clear(&mut self) {
		self.xml.clear();
		self.namespaces = Namespaces::new();
	}
}

/// `default` is the default namespace in effect at this point of the output; a captured fragment
/// starts out under the Atom default of the document it gets written into.
fn render<'e>(out: &mut String, element: &'e Element, default: &'e str) {
	let name = element.name().qualified_name();
	out.push('<');
	out.push_str(&name);

	let mut default = default;
	match element.declarations().iter().find(|d| d.prefix.is_none()) {
		Some(declaration) if declaration.uri.is_empty() => default = ATOM_NAMESPACE,
		Some(declaration) => default = &declaration.uri,
		None if element.prefix().is_none() => {
			// unprefixed elements pick up a foreign default from outside the fragment
			let namespace = element.namespace().unwrap_or(ATOM_NAMESPACE);
			if namespace != default {
				out.push_str(" xmlns='");
				out.push_str(&escape_attribute(namespace));
				out.push('\'');
				default = namespace;
			}
		},
		None => (),
	}
	for declaration in element.declarations() {
		match &declaration.prefix {
			Some(prefix) => {
				out.push_str(" xmlns:");
				out.push_str(prefix);
			},
			None => out.push_str(" xmlns"),
		}
		out.push_str("='");
		out.push_str(&escape_attribute(&declaration.uri));
		out.push('\'');
	}
	for attr in element.attributes() {
		out.push(' ');
		out.push_str(&attr.name);
		out.push_str("='");
		out.push_str(&escape_attribute(&attr.value));
		out.push('\'');
	}

	if element.children().is_empty() {
		out.push_str("/>");
		return;
	}
	out.push('>');
	for child in element.children() {
		match child {
			Node::Element(child) => render(out, child, default),
			Node::Text(text) => out.push_str(&escape_text(text)),
		}
	}
	out.push_str("</");
	out.push_str(&name);
	out.push('>');
}

fn collect_declarations(namespaces: &mut Namespaces, element: &Element) {
	for declaration in element.declarations() {
		if let Some(prefix) = &declaration.prefix {
			namespaces.insert(prefix, &declaration.uri);
		}
	}
	for child in element.child_elements() {
		collect_declarations(namespaces, child);
	}
}

/// Serialize `element` with its subtree, and collect the namespaces in scope on it plus every
/// namespace declared inside it.
pub fn capture(element: &Element) -> (String, Namespaces) {
	let mut fragment = String::new();
	render(&mut fragment, element, ATOM_NAMESPACE);

	let mut namespaces: Namespaces = element.in_scope_namespaces().collect();
	collect_declarations(&mut namespaces, element);
	(fragment, namespaces)
}

/// Text nobody accepted
pub fn capture_text(text: &str) -> (String, Namespaces) {
	(escape_text(text).into_owned(), Namespaces::new())
}
