use crate::{
	namespaces::{
		collect_namespaces,
		Namespaces,
		ATOM_NAMESPACE,
	},
	serializer::{
		core::{
			end_element,
			start_content,
			AttributeWriter,
			ContentWriter,
		},
		escape::escape_attribute,
	},
	traits::Parsable,
	Result,
};

fn declarations(namespaces: &Namespaces) -> String {
	let mut out = String::from(" xmlns='");
	out.push_str(ATOM_NAMESPACE);
	out.push('\'');
	for (prefix, uri) in namespaces.iter() {
		out.push_str(" xmlns:");
		out.push_str(prefix);
		out.push_str("='");
		out.push_str(&escape_attribute(uri));
		out.push('\'');
	}
	out
}

/// Write `object` as element through its hook chain
///
/// `namespaces` collects the bindings of this and all nested objects; with `declare` they get
/// rendered onto this element once its content is known.
pub(super) fn write_element<T: Parsable>(
	out: &mut String,
	namespaces: &mut Namespaces,
	object: &T,
	declare: bool,
) -> Result<()> {
	let descriptor = T::descriptor();
	let name = descriptor.qualified_name();
	namespaces.merge(&collect_namespaces(object));

	out.push('<');
	out.push_str(&name);
	let declarations_at = out.len();

	let mut attributes = AttributeWriter::new(&mut *out);
	for hooks in descriptor.chain_base_first() {
		hooks.pre_emit(object, &mut attributes)?;
	}

	let mark = start_content(out);
	let mut content = ContentWriter::new(&mut *out, &mut *namespaces);
	for hooks in descriptor.chain_base_first() {
		hooks.emit(object, &mut content)?;
	}
	for fragment in object.extra().xml() {
		out.push_str(fragment);
	}
	end_element(out, mark, &name);

	if declare {
		out.insert_str(declarations_at, &declarations(namespaces));
	}
	Ok(())
}

/// Serialize `object` as root element
///
/// The root element declares the Atom default namespace and every prefix used by the object, its
/// ancestors, its extra content and all nested objects.
pub fn serialize<T: Parsable>(object: &T) -> Result<String> {
	let mut out = String::new();
	let mut namespaces = Namespaces::new();
	write_element(&mut out, &mut namespaces, object, true)?;
	tracing::trace!(element = T::descriptor().element_name, "serialized {} bytes", out.len());
	Ok(out)
}

/// Serialize `object` as nested element (without namespace declarations)
pub fn serialize_fragment<T: Parsable>(object: &T) -> Result<String> {
	let mut out = String::new();
	write_element(&mut out, &mut Namespaces::new(), object, false)?;
	Ok(out)
}

/// Serialize `object` as full document, including the XML declaration
pub fn serialize_document<T: Parsable>(object: &T) -> Result<String> {
	let mut out = String::from("<?xml version='1.0' encoding='UTF-8'?>");
	out.push_str(&serialize(object)?);
	Ok(out)
}
