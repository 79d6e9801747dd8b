use crate::{
	extra::ExtraContent,
	parser::required_property,
	serializer::AttributeWriter,
	traits::{
		Hooks,
		Parsable,
		TypeDescriptor,
	},
	tree::Element,
	Result,
};

/// Category of an entry (`<category term='..'/>`)
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Category {
	/// Identifies the category; required
	pub term: String,
	/// Categorization scheme `term` belongs to
	pub scheme: Option<String>,
	/// Human readable label
	pub label: Option<String>,
	/// Unrecognized content
	pub extra: ExtraContent,
}

impl Category {
	/// Category in the given scheme
	pub fn new(term: &str, scheme: Option<&str>) -> Self {
		Self {
			term: term.to_owned(),
			scheme: scheme.map(str::to_owned),
			..Self::default()
		}
	}
}

struct CategoryHooks;

impl Hooks<Category> for CategoryHooks {
	fn pre_parse(&self, category: &mut Category, root: &Element) -> Result<()> {
		category.term = required_property(root, "term")?.to_owned();
		category.scheme = root.attribute("scheme").map(str::to_owned);
		category.label = root.attribute("label").map(str::to_owned);
		Ok(())
	}

	fn pre_emit(&self, category: &Category, attributes: &mut AttributeWriter<'_>) -> Result<()> {
		attributes.attribute("term", &category.term);
		attributes.optional_attribute("scheme", category.scheme.as_deref());
		attributes.optional_attribute("label", category.label.as_deref());
		Ok(())
	}
}

impl Parsable for Category {
	fn descriptor() -> &'static TypeDescriptor<Self> {
		static DESCRIPTOR: TypeDescriptor<Category> = TypeDescriptor {
			element_name: "category",
			element_namespace: None,
			hooks: &[&CategoryHooks],
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
