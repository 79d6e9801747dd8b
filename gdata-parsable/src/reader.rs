//! Build a `tree::Element` from a document using `quick-xml`

use crate::{
	errors,
	tree::{
		Attribute,
		Declaration,
		Element,
		ElementName,
		Node,
		Scope,
	},
	Error,
	Result,
};
use quick_xml::{
	events::{
		BytesStart,
		Event,
	},
	Reader,
};
use std::sync::Arc;

fn utf8(bytes: &[u8]) -> Result<&str> {
	std::str::from_utf8(bytes).map_err(errors::parsing_string)
}

fn split_name(name: &str) -> (Option<String>, String) {
	match name.split_once(':') {
		Some((prefix, local)) => (Some(prefix.to_owned()), local.to_owned()),
		None => (None, name.to_owned()),
	}
}

/// Element under construction; children are attached once it is closed.
struct Open {
	element: Element,
	raw_name: String,
}

fn open_element(start: &BytesStart<'_>, parent: Option<&Element>, root_scope: &Arc<Scope>) -> Result<Open> {
	let raw_name = utf8(start.name().as_ref())?.to_owned();

	let mut attributes = Vec::new();
	let mut declarations = Vec::new();
	for attr in start.attributes() {
		let attr = attr.map_err(errors::parsing_string)?;
		let key = utf8(attr.key.as_ref())?;
		let value = attr.unescape_value().map_err(errors::parsing_string)?.into_owned();
		if key == "xmlns" {
			declarations.push(Declaration { prefix: None, uri: value });
		} else if let Some(prefix) = key.strip_prefix("xmlns:") {
			declarations.push(Declaration {
				prefix: Some(prefix.to_owned()),
				uri: value,
			});
		} else {
			attributes.push(Attribute {
				name: key.to_owned(),
				value,
			});
		}
	}

	let scope = Scope::nested(parent.map_or(root_scope, |p| &p.scope), &declarations);
	let (prefix, local) = split_name(&raw_name);
	let namespace = scope.lookup(prefix.as_deref()).map(str::to_owned);

	Ok(Open {
		element: Element {
			name: ElementName {
				prefix,
				local,
				namespace,
			},
			parent: parent.map(|p| p.name.clone()),
			attributes,
			declarations,
			scope,
			children: Vec::new(),
		},
		raw_name,
	})
}

fn push_text(element: &mut Element, text: &str) {
	if let Some(Node::Text(last)) = element.children.last_mut() {
		last.push_str(text);
	} else {
		element.children.push(Node::Text(text.to_owned()));
	}
}

/// Parse a single root element (with all nested data) from a document
///
/// Comments, processing instructions, the XML declaration and the doctype are dropped; text and
/// CDATA are merged into text nodes.
pub(crate) fn read_tree(input: &[u8]) -> Result<Element> {
	let input = utf8(input)?;
	let mut reader = Reader::from_str(input);
	let root_scope = Arc::new(Scope::default());
	let mut stack: Vec<Open> = Vec::new();
	let mut root: Option<Element> = None;

	loop {
		let event = reader.read_event().map_err(errors::parsing_string)?;
		match event {
			Event::Eof => {
				if let Some(open) = stack.last() {
					return Err(Error::ParsingString {
						message: format!("unclosed element <{}>", open.raw_name),
					});
				}
				return root.ok_or(Error::EmptyDocument);
			},
			Event::Start(start) | Event::Empty(start) if stack.is_empty() && root.is_some() => {
				return Err(Error::ParsingString {
					message: format!(
						"unexpected element <{}> after the root element",
						String::from_utf8_lossy(start.name().as_ref()),
					),
				});
			},
			Event::Start(start) => {
				let open = open_element(&start, stack.last().map(|o| &o.element), &root_scope)?;
				stack.push(open);
			},
			Event::Empty(start) => {
				let open = open_element(&start, stack.last().map(|o| &o.element), &root_scope)?;
				match stack.last_mut() {
					Some(parent) => parent.element.children.push(Node::Element(open.element)),
					None => root = Some(open.element),
				}
			},
			Event::End(end) => {
				let open = match stack.pop() {
					Some(open) => open,
					None => {
						return Err(Error::ParsingString {
							message: "unexpected end tag".into(),
						})
					},
				};
				let name = end.name();
				let name = utf8(name.as_ref())?;
				if name != open.raw_name {
					return Err(Error::ParsingString {
						message: format!("expected </{}>, found </{}>", open.raw_name, name),
					});
				}
				match stack.last_mut() {
					Some(parent) => parent.element.children.push(Node::Element(open.element)),
					None => root = Some(open.element),
				}
			},
			Event::Text(text) => {
				let text = text.unescape().map_err(errors::parsing_string)?;
				match stack.last_mut() {
					Some(open) => push_text(&mut open.element, &text),
					None if text.trim().is_empty() => (),
					None => {
						return Err(Error::ParsingString {
							message: "unexpected text outside the root element".into(),
						})
					},
				}
			},
			Event::CData(data) => {
				let text = utf8(&data)?;
				match stack.last_mut() {
					Some(open) => push_text(&mut open.element, text),
					None => {
						return Err(Error::ParsingString {
							message: "unexpected CDATA outside the root element".into(),
						})
					},
				}
			},
			// comments, PIs, decl and doctype carry nothing the hooks look at
			_ => (),
		}
	}
}
