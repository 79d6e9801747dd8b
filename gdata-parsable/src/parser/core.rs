use crate::{
	errors,
	extra,
	traits::{
		ParseResult,
		Parsable,
		TypeDescriptor,
	},
	tree::{
		Document,
		Element,
		Node,
	},
	Result,
};

fn dispatch_child<T: Parsable>(
	descriptor: &TypeDescriptor<T>,
	object: &mut T,
	child: &Element,
) -> Result<ParseResult> {
	for hooks in descriptor.chain() {
		if hooks.parse_child(object, child)? == ParseResult::Accepted {
			return Ok(ParseResult::Accepted);
		}
	}
	Ok(ParseResult::NotRecognized)
}

fn dispatch_text<T: Parsable>(
	descriptor: &TypeDescriptor<T>,
	object: &mut T,
	root: &Element,
	text: &str,
) -> Result<ParseResult> {
	for hooks in descriptor.chain() {
		if hooks.parse_text(object, root, text)? == ParseResult::Accepted {
			return Ok(ParseResult::Accepted);
		}
	}
	Ok(ParseResult::NotRecognized)
}

/// Parse `element` into a new `T`
///
/// Runs all `pre_parse` hooks (base first), offers every child to the hook chain (most derived
/// first) and finally runs all `post_parse` hooks (base first). Children no hook accepts are
/// preserved in the object's `ExtraContent`; whitespace-only text is skipped.
///
/// The name of `element` is not checked: hooks call this for nested elements they already
/// matched.
pub fn parse_element<T: Parsable>(element: &Element) -> Result<T> {
	let descriptor = T::descriptor();
	let mut object = T::default();

	for hooks in descriptor.chain_base_first() {
		hooks.pre_parse(&mut object, element)?;
	}

	for child in element.children() {
		let unhandled = match child {
			Node::Text(text) if text.trim().is_empty() => continue,
			Node::Text(text) => match dispatch_text(descriptor, &mut object, element, text)? {
				ParseResult::Accepted => continue,
				ParseResult::NotRecognized => extra::capture_text(text),
			},
			Node::Element(child) => match dispatch_child(descriptor, &mut object, child)? {
				ParseResult::Accepted => continue,
				ParseResult::NotRecognized => extra::capture(child),
			},
		};
		let (fragment, namespaces) = unhandled;
		tracing::debug!(
			element = %element.path(),
			"unhandled XML in {}: {}",
			std::any::type_name::<T>(),
			fragment,
		);
		object.extra_mut().push(fragment, namespaces);
	}

	for hooks in descriptor.chain_base_first() {
		hooks.post_parse(&mut object, element)?;
	}

	Ok(object)
}

/// Parse a complete document whose root element must be named like `T`'s element
///
/// Fails with `Error::ParsingString` / `Error::EmptyDocument` for broken input, and with
/// `Error::RequiredElementMissing` if the root element has a different (local) name.
pub fn parse_document<T: Parsable>(input: &[u8]) -> Result<T> {
	let document = Document::parse(input)?;
	let root = document.root();
	let expected = T::descriptor().element_name;
	tracing::trace!(root = %root.name().qualified_name(), expected, "parsing document");
	if root.local_name() != expected {
		return Err(errors::required_root_missing(expected));
	}
	parse_element(root)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		test_types::Traced,
		Error,
	};

	fn parse(input: &str) -> Result<Traced> {
		parse_document(input.as_bytes())
	}

	#[test]
	fn hook_order() {
		let object = parse("<t:traced xmlns:t='urn:t' base='1'><x/><derived>d</derived></t:traced>").unwrap();
		assert_eq!(
			object.calls,
			vec![
				"base:pre",
				"derived:pre",
				"derived:child:x",
				"base:child:x",
				"derived:child:derived",
				"base:post",
				"derived:post",
			],
		);
		assert_eq!(object.base_value.as_deref(), Some("1"));
		assert_eq!(object.derived_value.as_deref(), Some("d"));
		assert_eq!(object.extra.xml(), ["<x/>".to_owned()]);
	}

	#[test]
	fn most_derived_gets_first_refusal() {
		let object = parse("<traced><shared/><shared to='base'/><base>b</base></traced>").unwrap();
		assert_eq!(object.shared, vec!["derived", "base"]);
		assert_eq!(object.base_value.as_deref(), Some("b"));
		assert!(object.extra.is_empty());
	}

	#[test]
	fn text_children() {
		let object = parse("<traced>\n  keep:yes \n <a/> other &amp; more </traced>").unwrap();
		assert_eq!(object.text.as_deref(), Some("yes"));
		assert_eq!(object.extra.xml(), ["<a/>".to_owned(), " other &amp; more ".to_owned()]);
	}

	#[test]
	fn extra_keeps_order() {
		let object = parse("<traced><a/><base>x</base><b>1</b><derived/><c k='v'/></traced>").unwrap();
		assert_eq!(
			object.extra.xml(),
			["<a/>".to_owned(), "<b>1</b>".to_owned(), "<c k='v'/>".to_owned()],
		);
	}

	#[test]
	fn failures_abort() {
		assert!(matches!(
			parse("<traced fail='pre'><x/></traced>"),
			Err(Error::UnknownPropertyValue { .. })
		));
		assert_eq!(
			parse("<traced fail='post'/>").unwrap_err(),
			Error::RequiredElementMissing {
				path: "<traced/derived>".into()
			},
		);
		assert_eq!(
			parse("<traced><base>1</base><base>2</base></traced>").unwrap_err(),
			Error::DuplicateElement {
				path: "<traced/base>".into()
			},
		);
	}

	#[test]
	fn document_entry() {
		assert_eq!(parse("").unwrap_err(), Error::EmptyDocument);
		assert!(matches!(parse("<traced>"), Err(Error::ParsingString { .. })));
		assert_eq!(
			parse("<other/>").unwrap_err(),
			Error::RequiredElementMissing {
				path: "<traced>".into()
			},
		);
		// prefix doesn't matter, only the local name
		assert!(parse("<x:traced xmlns:x='urn:x'/>").is_ok());
	}
}
