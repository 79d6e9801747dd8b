use crate::{
	extra::ExtraContent,
	namespaces::Namespaces,
	parser,
	serializer::{
		self,
		AttributeWriter,
		ContentWriter,
	},
	tree::Element,
	Result,
};
use std::borrow::Cow;

/// Result of `Hooks::parse_child` and `Hooks::parse_text` to signal whether a hook consumed the
/// input or the next level of the chain needs to take a shot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParseResult {
	/// Consumed
	Accepted,
	/// Offer it to the next level (or keep it as extra content)
	NotRecognized,
}

/// One level of a type's hook chain
///
/// A concrete element type usually has one level for its own fields; a subtype adds a level in
/// front of the levels of the type it extends. All methods default to doing nothing (or not
/// recognizing anything).
///
/// The engine calls the hooks in a fixed order:
/// - parsing: `pre_parse` (base first), then for each child `parse_child` / `parse_text` (most
///   derived first, until one accepts), then `post_parse` (base first)
/// - serializing: `pre_emit` (base first), then `emit` (base first)
pub trait Hooks<T>: Sync {
	/// Look at the attributes of the element being parsed
	fn pre_parse(&self, object: &mut T, root: &Element) -> Result<()> {
		let _ = (object, root);
		Ok(())
	}

	/// Try parsing a child element
	///
	/// Must not fail for elements it doesn't know; return `ParseResult::NotRecognized` instead.
	/// Rejecting duplicates of singleton elements is up to the hook.
	fn parse_child(&self, object: &mut T, child: &Element) -> Result<ParseResult> {
		let _ = (object, child);
		Ok(ParseResult::NotRecognized)
	}

	/// Try parsing (non-whitespace) text content of `root`
	fn parse_text(&self, object: &mut T, root: &Element, text: &str) -> Result<ParseResult> {
		let _ = (object, root, text);
		Ok(ParseResult::NotRecognized)
	}

	/// Check the object after all children were seen
	fn post_parse(&self, object: &mut T, root: &Element) -> Result<()> {
		let _ = (object, root);
		Ok(())
	}

	/// Write attributes of the element
	fn pre_emit(&self, object: &T, attributes: &mut AttributeWriter<'_>) -> Result<()> {
		let _ = (object, attributes);
		Ok(())
	}

	/// Write content (text and nested elements)
	fn emit(&self, object: &T, content: &mut ContentWriter<'_>) -> Result<()> {
		let _ = (object, content);
		Ok(())
	}

	/// Namespaces this level's XML vocabulary uses
	fn namespaces(&self, object: &T, namespaces: &mut Namespaces) {
		let _ = (object, namespaces);
	}
}

/// Element name and hook chain of a parsable type
pub struct TypeDescriptor<T: 'static> {
	/// Local name of the element
	pub element_name: &'static str,
	/// Prefix to serialize the element with; its binding must be reported by a `namespaces` hook.
	pub element_namespace: Option<&'static str>,
	/// Hook levels, most derived first
	pub hooks: &'static [&'static dyn Hooks<T>],
}

impl<T: 'static> TypeDescriptor<T> {
	/// Levels from most derived to base
	pub fn chain(&self) -> impl DoubleEndedIterator<Item = &'static dyn Hooks<T>> {
		self.hooks.iter().copied()
	}

	/// Levels from base to most derived
	pub fn chain_base_first(&self) -> impl Iterator<Item = &'static dyn Hooks<T>> {
		self.chain().rev()
	}

	/// Name to serialize the element with
	pub fn qualified_name(&self) -> Cow<'static, str> {
		match self.element_namespace {
			Some(prefix) => Cow::Owned(format!("{}:{}", prefix, self.element_name)),
			None => Cow::Borrowed(self.element_name),
		}
	}
}

/// Type that can be parsed from and serialized to XML through its hook chain
///
/// The object owns its `ExtraContent`: XML that no hook recognized, kept so it can be written back.
pub trait Parsable: Default + Sized + 'static {
	/// Element name and hooks
	fn descriptor() -> &'static TypeDescriptor<Self>;

	/// Preserved unrecognized content
	fn extra(&self) -> &ExtraContent;

	/// Mutable access to preserved unrecognized content
	fn extra_mut(&mut self) -> &mut ExtraContent;

	/// Parse a complete document; see `parser::parse_document`.
	fn from_xml(input: &[u8]) -> Result<Self> {
		parser::parse_document(input)
	}

	/// Serialize as root element including namespace declarations; see `serializer::serialize`.
	fn to_xml(&self) -> Result<String> {
		serializer::serialize(self)
	}
}
