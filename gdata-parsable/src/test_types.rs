//! Two-level type recording the order the engine calls its hooks in

use crate::{
	errors,
	extra::ExtraContent,
	namespaces::Namespaces,
	parser::{
		string_from_element,
		ParserOptions,
	},
	serializer::{
		AttributeWriter,
		ContentWriter,
	},
	traits::{
		Hooks,
		ParseResult,
		Parsable,
		TypeDescriptor,
	},
	tree::Element,
	Result,
};

pub const BASE_NAMESPACE: &str = "urn:test:base";
pub const DERIVED_NAMESPACE: &str = "urn:test:derived";

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Traced {
	pub base_value: Option<String>,
	pub derived_value: Option<String>,
	pub shared: Vec<&'static str>,
	pub text: Option<String>,
	pub calls: Vec<String>,
	pub extra: ExtraContent,
}

pub struct BaseHooks;

impl Hooks<Traced> for BaseHooks {
	fn pre_parse(&self, object: &mut Traced, root: &Element) -> Result<()> {
		object.calls.push("base:pre".into());
		object.base_value = root.attribute("base").map(str::to_owned);
		if root.attribute("fail") == Some("pre") {
			return Err(errors::unknown_property_value(root, "fail", "pre"));
		}
		Ok(())
	}

	fn parse_child(&self, object: &mut Traced, child: &Element) -> Result<ParseResult> {
		object.calls.push(format!("base:child:{}", child.local_name()));
		if child.local_name() == "shared" {
			object.shared.push("base");
			return Ok(ParseResult::Accepted);
		}
		if string_from_element(child, "base", ParserOptions::NO_DUPES, &mut object.base_value)? {
			return Ok(ParseResult::Accepted);
		}
		Ok(ParseResult::NotRecognized)
	}

	fn post_parse(&self, object: &mut Traced, _root: &Element) -> Result<()> {
		object.calls.push("base:post".into());
		Ok(())
	}

	fn pre_emit(&self, object: &Traced, attributes: &mut AttributeWriter<'_>) -> Result<()> {
		attributes.optional_attribute("base", object.base_value.as_deref());
		Ok(())
	}

	fn emit(&self, object: &Traced, content: &mut ContentWriter<'_>) -> Result<()> {
		content.optional_text_element("base", object.base_value.as_deref());
		Ok(())
	}

	fn namespaces(&self, _object: &Traced, namespaces: &mut Namespaces) {
		namespaces.insert("base", BASE_NAMESPACE);
		namespaces.insert("t", "urn:test:shadowed");
	}
}

pub struct DerivedHooks;

impl Hooks<Traced> for DerivedHooks {
	fn pre_parse(&self, object: &mut Traced, root: &Element) -> Result<()> {
		object.calls.push("derived:pre".into());
		object.derived_value = root.attribute("derived").map(str::to_owned);
		Ok(())
	}

	fn parse_child(&self, object: &mut Traced, child: &Element) -> Result<ParseResult> {
		object.calls.push(format!("derived:child:{}", child.local_name()));
		if child.local_name() == "shared" && child.attribute("to") != Some("base") {
			object.shared.push("derived");
			return Ok(ParseResult::Accepted);
		}
		if string_from_element(child, "derived", ParserOptions::NO_DUPES, &mut object.derived_value)? {
			return Ok(ParseResult::Accepted);
		}
		Ok(ParseResult::NotRecognized)
	}

	fn parse_text(&self, object: &mut Traced, _root: &Element, text: &str) -> Result<ParseResult> {
		match text.trim().strip_prefix("keep:") {
			Some(kept) => {
				object.text = Some(kept.to_owned());
				Ok(ParseResult::Accepted)
			},
			None => Ok(ParseResult::NotRecognized),
		}
	}

	fn post_parse(&self, object: &mut Traced, root: &Element) -> Result<()> {
		object.calls.push("derived:post".into());
		if root.attribute("fail") == Some("post") {
			return Err(errors::required_element_missing(root, "derived"));
		}
		Ok(())
	}

	fn pre_emit(&self, object: &Traced, attributes: &mut AttributeWriter<'_>) -> Result<()> {
		attributes.optional_attribute("derived", object.derived_value.as_deref());
		Ok(())
	}

	fn emit(&self, object: &Traced, content: &mut ContentWriter<'_>) -> Result<()> {
		content.optional_text_element("derived", object.derived_value.as_deref());
		Ok(())
	}

	fn namespaces(&self, _object: &Traced, namespaces: &mut Namespaces) {
		namespaces.insert("t", DERIVED_NAMESPACE);
	}
}

impl Parsable for Traced {
	fn descriptor() -> &'static TypeDescriptor<Self> {
		static DESCRIPTOR: TypeDescriptor<Traced> = TypeDescriptor {
			element_name: "traced",
			element_namespace: Some("t"),
			hooks: &[&DerivedHooks, &BaseHooks],
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
