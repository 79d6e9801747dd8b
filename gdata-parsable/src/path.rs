//! Render element locations for error messages
//!
//! A location names the element and its parent, like `<media:group/media:title>`. Prefixes are
//! only shown for elements outside the Atom namespace.

use crate::{
	namespaces::ATOM_NAMESPACE,
	tree::{
		Element,
		ElementName,
	},
};

fn push_name(out: &mut String, name: &ElementName) {
	match (name.prefix(), name.namespace()) {
		(Some(prefix), Some(namespace)) if namespace != ATOM_NAMESPACE => {
			out.push_str(prefix);
			out.push(':');
		},
		_ => (),
	}
	out.push_str(name.local_name());
}

/// Location of `element`
pub fn element_path(element: &Element) -> String {
	let mut out = String::from("<");
	if let Some(parent) = element.parent_name() {
		push_name(&mut out, parent);
		out.push('/');
	}
	push_name(&mut out, element.name());
	out.push('>');
	out
}

/// Location of a (missing) child `name` of `parent`; `name` is used as given.
pub fn child_path(parent: &Element, name: &str) -> String {
	let mut out = String::from("<");
	push_name(&mut out, parent.name());
	out.push('/');
	out.push_str(name);
	out.push('>');
	out
}
