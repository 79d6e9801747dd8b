use crate::{
	extra::ExtraContent,
	namespaces::{
		Namespaces,
		ATOM_NAMESPACE,
		GDATA_NAMESPACE,
	},
	parser::{
		objects_from_element,
		string_from_element,
		timestamp_from_element,
		ParserOptions,
	},
	serializer::{
		AttributeWriter,
		ContentWriter,
	},
	timestamp::Timestamp,
	traits::{
		Hooks,
		ParseResult,
		Parsable,
		TypeDescriptor,
	},
	tree::Element,
	Result,
};

use super::{
	Author,
	Category,
};

/// Atom entry with the GData `etag`
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Entry {
	/// `gd:etag` attribute
	pub etag: Option<String>,
	/// Plain text title
	pub title: Option<String>,
	/// Unique identifier (IRI)
	pub id: Option<String>,
	/// Last modification
	pub updated: Option<Timestamp>,
	/// Creation
	pub published: Option<Timestamp>,
	/// Categories in document order
	pub categories: Vec<Category>,
	/// Authors in document order
	pub authors: Vec<Author>,
	/// Unrecognized content
	pub extra: ExtraContent,
}

impl AsRef<Entry> for Entry {
	fn as_ref(&self) -> &Entry {
		self
	}
}

impl AsMut<Entry> for Entry {
	fn as_mut(&mut self) -> &mut Entry {
		self
	}
}

/// Hooks for the `Entry` level
///
/// Work for every type embedding an `Entry`; put them last in the hook list of the type.
pub struct EntryHooks;

impl<T: AsRef<Entry> + AsMut<Entry>> Hooks<T> for EntryHooks {
	fn pre_parse(&self, object: &mut T, root: &Element) -> Result<()> {
		object.as_mut().etag = root.attribute("gd:etag").map(str::to_owned);
		Ok(())
	}

	fn parse_child(&self, object: &mut T, child: &Element) -> Result<ParseResult> {
		if !child.is_namespace(ATOM_NAMESPACE) {
			return Ok(ParseResult::NotRecognized);
		}
		let entry = object.as_mut();
		let single = ParserOptions::NO_DUPES;
		let stamp = ParserOptions::REQUIRED | ParserOptions::NO_DUPES;
		if string_from_element(child, "title", single, &mut entry.title)?
			|| string_from_element(child, "id", single | ParserOptions::REQUIRED | ParserOptions::NON_EMPTY, &mut entry.id)?
			|| timestamp_from_element(child, "updated", stamp, &mut entry.updated)?
			|| timestamp_from_element(child, "published", stamp, &mut entry.published)?
			|| objects_from_element(child, &mut entry.categories)?
			|| objects_from_element(child, &mut entry.authors)?
		{
			return Ok(ParseResult::Accepted);
		}
		Ok(ParseResult::NotRecognized)
	}

	fn pre_emit(&self, object: &T, attributes: &mut AttributeWriter<'_>) -> Result<()> {
		attributes.optional_attribute("gd:etag", object.as_ref().etag.as_deref());
		Ok(())
	}

	fn emit(&self, object: &T, content: &mut ContentWriter<'_>) -> Result<()> {
		let entry = object.as_ref();
		if let Some(title) = &entry.title {
			content.child(
				"title",
				|attributes| attributes.attribute("type", "text"),
				|content| {
					content.text(title);
					Ok(())
				},
			)?;
		}
		content.optional_text_element("id", entry.id.as_deref());
		content.optional_text_element("updated", entry.updated.as_ref().map(Timestamp::as_str));
		content.optional_text_element("published", entry.published.as_ref().map(Timestamp::as_str));
		content.elements(&entry.categories)?;
		content.elements(&entry.authors)?;
		Ok(())
	}

	fn namespaces(&self, object: &T, namespaces: &mut Namespaces) {
		if object.as_ref().etag.is_some() {
			namespaces.insert("gd", GDATA_NAMESPACE);
		}
	}
}

impl Parsable for Entry {
	fn descriptor() -> &'static TypeDescriptor<Self> {
		static DESCRIPTOR: TypeDescriptor<Entry> = TypeDescriptor {
			element_name: "entry",
			element_namespace: None,
			hooks: &[&EntryHooks],
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
