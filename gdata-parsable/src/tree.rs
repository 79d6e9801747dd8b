//! Read-only XML tree handed to the parse engine
//!
//! A `Document` is built once from a byte buffer (see `Document::parse`); hooks only ever see
//! shared references to its `Element`s.

use crate::{
	namespaces::{
		ATOM_NAMESPACE,
		XML_NAMESPACE,
	},
	path,
	reader,
	Result,
};
use std::{
	borrow::Cow,
	sync::Arc,
};

/// Qualified name of an element together with its resolved namespace
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ElementName {
	pub(crate) prefix: Option<String>,
	pub(crate) local: String,
	pub(crate) namespace: Option<String>,
}

impl ElementName {
	/// Namespace prefix as written in the source (`media` in `<media:group>`)
	pub fn prefix(&self) -> Option<&str> {
		self.prefix.as_deref()
	}

	/// Name without prefix
	pub fn local_name(&self) -> &str {
		&self.local
	}

	/// Resolved namespace URI, if the prefix (or default namespace) was bound
	pub fn namespace(&self) -> Option<&str> {
		self.namespace.as_deref()
	}

	/// Name including the prefix, as written in the source
	pub fn qualified_name(&self) -> Cow<'_, str> {
		match &self.prefix {
			Some(prefix) => Cow::Owned(format!("{}:{}", prefix, self.local)),
			None => Cow::Borrowed(&self.local),
		}
	}

	/// Whether the element lives in `uri`; elements without namespace count as Atom.
	pub fn is_namespace(&self, uri: &str) -> bool {
		match &self.namespace {
			Some(namespace) => namespace == uri,
			None => uri == ATOM_NAMESPACE,
		}
	}
}

/// Attribute of an element, in source order
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Attribute {
	/// Qualified name (`gd:etag`)
	pub name: String,
	/// Unescaped value
	pub value: String,
}

/// Namespace declaration (`xmlns='..'` or `xmlns:prefix='..'`) made on an element
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Declaration {
	/// `None` for the default namespace
	pub prefix: Option<String>,
	/// Namespace URI
	pub uri: String,
}

/// Namespace bindings visible at an element
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub(crate) struct Scope {
	pub(crate) default: Option<String>,
	pub(crate) prefixed: Vec<(String, String)>,
}

impl Scope {
	pub(crate) fn lookup(&self, prefix: Option<&str>) -> Option<&str> {
		match prefix {
			None => self.default.as_deref(),
			Some("xml") => Some(XML_NAMESPACE),
			Some(prefix) => self
				.prefixed
				.iter()
				.rev()
				.find(|(p, _)| p == prefix)
				.map(|(_, uri)| uri.as_str()),
		}
	}

	/// Apply declarations; shares the parent scope if there are none.
	pub(crate) fn nested(parent: &Arc<Scope>, declarations: &[Declaration]) -> Arc<Scope> {
		if declarations.is_empty() {
			return Arc::clone(parent);
		}
		let mut scope = Scope::clone(parent);
		for declaration in declarations {
			match &declaration.prefix {
				None => {
					scope.default = if declaration.uri.is_empty() {
						None
					} else {
						Some(declaration.uri.clone())
					};
				},
				Some(prefix) if prefix == "xml" => (),
				Some(prefix) => {
					scope.prefixed.retain(|(p, _)| p != prefix);
					scope.prefixed.push((prefix.clone(), declaration.uri.clone()));
				},
			}
		}
		Arc::new(scope)
	}
}

/// Child of an element
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Node {
	/// Nested element
	Element(Element),
	/// Text or CDATA (unescaped; adjacent pieces are merged)
	Text(String),
}

impl Node {
	/// The element, unless this is text
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Node::Element(element) => Some(element),
			Node::Text(_) => None,
		}
	}
}

/// An element with its attributes and children
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Element {
	pub(crate) name: ElementName,
	pub(crate) parent: Option<ElementName>,
	pub(crate) attributes: Vec<Attribute>,
	pub(crate) declarations: Vec<Declaration>,
	pub(crate) scope: Arc<Scope>,
	pub(crate) children: Vec<Node>,
}

impl Element {
	/// Full name of this element
	pub fn name(&self) -> &ElementName {
		&self.name
	}

	/// Shortcut for `name().local_name()`
	pub fn local_name(&self) -> &str {
		self.name.local_name()
	}

	/// Shortcut for `name().prefix()`
	pub fn prefix(&self) -> Option<&str> {
		self.name.prefix()
	}

	/// Shortcut for `name().namespace()`
	pub fn namespace(&self) -> Option<&str> {
		self.name.namespace()
	}

	/// Shortcut for `name().is_namespace(uri)`
	pub fn is_namespace(&self, uri: &str) -> bool {
		self.name.is_namespace(uri)
	}

	/// Name of the enclosing element; `None` for the document root
	pub fn parent_name(&self) -> Option<&ElementName> {
		self.parent.as_ref()
	}

	/// Attributes in source order (namespace declarations excluded)
	pub fn attributes(&self) -> &[Attribute] {
		&self.attributes
	}

	/// Look up an attribute by its qualified name
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|attr| attr.name == name)
			.map(|attr| attr.value.as_str())
	}

	/// Namespace declarations made on this element
	pub fn declarations(&self) -> &[Declaration] {
		&self.declarations
	}

	/// Prefixed namespace bindings in scope, including the ones declared on this element
	pub fn in_scope_namespaces(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.scope
			.prefixed
			.iter()
			.map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
	}

	/// Children in document order
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Child elements in document order
	pub fn child_elements(&self) -> impl Iterator<Item = &Element> + '_ {
		self.children.iter().filter_map(Node::as_element)
	}

	/// Concatenated direct text children; `None` if there are none.
	pub fn text(&self) -> Option<String> {
		let mut result: Option<String> = None;
		for child in &self.children {
			if let Node::Text(text) = child {
				result.get_or_insert_with(String::new).push_str(text);
			}
		}
		result
	}

	/// Human readable location for error messages, like `<media:group/media:title>`
	pub fn path(&self) -> String {
		path::element_path(self)
	}
}

/// A parsed XML document
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Document {
	root: Element,
}

impl Document {
	/// Parse a complete document
	///
	/// Fails with `Error::ParsingString` if the input is not well-formed (UTF-8) XML, and with
	/// `Error::EmptyDocument` if there is no root element.
	pub fn parse(input: &[u8]) -> Result<Self> {
		let root = reader::read_tree(input)?;
		Ok(Self { root })
	}

	/// The root element
	pub fn root(&self) -> &Element {
		&self.root
	}

	/// Take ownership of the root element
	pub fn into_root(self) -> Element {
		self.root
	}
}
