use crate::{
	errors,
	extra::ExtraContent,
	namespaces::ATOM_NAMESPACE,
	parser::{
		string_from_element,
		ParserOptions,
	},
	serializer::ContentWriter,
	traits::{
		Hooks,
		ParseResult,
		Parsable,
		TypeDescriptor,
	},
	tree::Element,
	Result,
};

/// Person construct (`<author>`)
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Author {
	/// Human readable name; required
	pub name: String,
	/// Home page
	pub uri: Option<String>,
	/// E-mail address
	pub email: Option<String>,
	/// Unrecognized content
	pub extra: ExtraContent,
}

impl Author {
	/// Author with just a name
	pub fn new(name: &str) -> Self {
		Self {
			name: name.to_owned(),
			..Self::default()
		}
	}
}

struct AuthorHooks;

impl Hooks<Author> for AuthorHooks {
	fn parse_child(&self, author: &mut Author, child: &Element) -> Result<ParseResult> {
		if !child.is_namespace(ATOM_NAMESPACE) {
			return Ok(ParseResult::NotRecognized);
		}
		let mut name = None;
		if string_from_element(child, "name", ParserOptions::REQUIRED | ParserOptions::NON_EMPTY, &mut name)? {
			// a parsed name is never empty
			if !author.name.is_empty() {
				return Err(errors::duplicate_element(child));
			}
			author.name = name.unwrap_or_default();
			return Ok(ParseResult::Accepted);
		}
		if string_from_element(child, "uri", ParserOptions::NO_DUPES, &mut author.uri)?
			|| string_from_element(child, "email", ParserOptions::NO_DUPES, &mut author.email)?
		{
			return Ok(ParseResult::Accepted);
		}
		Ok(ParseResult::NotRecognized)
	}

	fn post_parse(&self, author: &mut Author, root: &Element) -> Result<()> {
		if author.name.is_empty() {
			return Err(errors::required_element_missing(root, "name"));
		}
		Ok(())
	}

	fn emit(&self, author: &Author, content: &mut ContentWriter<'_>) -> Result<()> {
		content.text_element("name", &author.name);
		content.optional_text_element("uri", author.uri.as_deref());
		content.optional_text_element("email", author.email.as_deref());
		Ok(())
	}
}

impl Parsable for Author {
	fn descriptor() -> &'static TypeDescriptor<Self> {
		static DESCRIPTOR: TypeDescriptor<Author> = TypeDescriptor {
			element_name: "author",
			element_namespace: None,
			hooks: &[&AuthorHooks],
		};
		&DESCRIPTOR
	}

	fn extra(&self) -> &ExtraContent {
		&self.extra
	}

	fn extra_mut(&mut self) -> &mut ExtraContent {
		&mut self.extra
	}
}

#[cfg(test)]
mod test {
	use super::Author;
	use crate::{
		serializer::serialize_fragment,
		Error,
		Parsable,
	};

	#[test]
	fn parse() {
		let author = Author::from_xml(b"<author><name>Jane Doe</name><uri>http://example.com</uri></author>").unwrap();
		assert_eq!(author.name, "Jane Doe");
		assert_eq!(author.uri.as_deref(), Some("http://example.com"));
		assert_eq!(author.email, None);
		assert!(author.extra.is_empty());
		assert_eq!(
			serialize_fragment(&author).unwrap(),
			"<author><name>Jane Doe</name><uri>http://example.com</uri></author>",
		);
	}

	#[test]
	fn name_rules() {
		assert_eq!(
			Author::from_xml(b"<author><uri>http://example.com</uri></author>").unwrap_err(),
			Error::RequiredElementMissing {
				path: "<author/name>".into()
			},
		);
		assert_eq!(
			Author::from_xml(b"<author><name>a</name><name>b</name></author>").unwrap_err(),
			Error::DuplicateElement {
				path: "<author/name>".into()
			},
		);
		assert_eq!(
			Author::from_xml(b"<author><name>a</name><uri/><uri>http://x</uri></author>").unwrap_err(),
			Error::DuplicateElement {
				path: "<author/uri>".into()
			},
		);
		assert_eq!(
			Author::from_xml(b"<author><name> </name></author>").unwrap_err(),
			Error::RequiredContentMissing {
				path: "<author/name>".into()
			},
		);
	}

	#[test]
	fn foreign_children_are_kept() {
		let author = Author::from_xml(b"<author xmlns:x='urn:x'><name>a</name><x:name>b</x:name></author>").unwrap();
		assert_eq!(author.name, "a");
		assert_eq!(author.extra.xml(), ["<x:name>b</x:name>".to_owned()]);
		assert_eq!(author.extra.namespaces().get("x"), Some("urn:x"));
	}
}
