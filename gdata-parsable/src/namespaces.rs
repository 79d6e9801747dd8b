//! Namespace bindings and their aggregation over a hook chain

use crate::traits::Parsable;
use std::collections::{
	btree_map,
	BTreeMap,
};

/// Atom (RFC 4287); the default namespace of every serialized document
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";
/// GData core elements and attributes (`gd:`)
pub const GDATA_NAMESPACE: &str = "http://schemas.google.com/g/2005";
/// Predefined `xml:` prefix; never declared
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Map of prefix to namespace URI
///
/// Insertion never overrides an existing binding: the first writer wins.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Namespaces {
	map: BTreeMap<String, String>,
}

impl Namespaces {
	/// Empty map
	pub fn new() -> Self {
		Self::default()
	}

	/// Bind `prefix` unless it is bound already; returns whether the binding was added.
	pub fn insert(&mut self, prefix: &str, uri: &str) -> bool {
		match self.map.entry(prefix.to_owned()) {
			btree_map::Entry::Occupied(_) => false,
			btree_map::Entry::Vacant(entry) => {
				entry.insert(uri.to_owned());
				true
			},
		}
	}

	/// Merge all bindings of `other` that aren't bound here yet
	pub fn merge(&mut self, other: &Namespaces) {
		for (prefix, uri) in other.iter() {
			self.insert(prefix, uri);
		}
	}

	/// URI bound to `prefix`
	pub fn get(&self, prefix: &str) -> Option<&str> {
		self.map.get(prefix).map(String::as_str)
	}

	/// Bindings ordered by prefix
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.map.iter().map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
	}

	/// Number of bindings
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Whether there are no bindings
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}
}

impl<'a> FromIterator<(&'a str, &'a str)> for Namespaces {
	fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
		let mut namespaces = Self::new();
		for (prefix, uri) in iter {
			namespaces.insert(prefix, uri);
		}
		namespaces
	}
}

/// Namespaces used by `object`: its own hook level first, then its ancestors, then the ones its
/// extra content needs.
pub fn collect_namespaces<T: Parsable>(object: &T) -> Namespaces {
	let mut namespaces = Namespaces::new();
	for hooks in T::descriptor().chain() {
		hooks.namespaces(object, &mut namespaces);
	}
	namespaces.merge(object.extra().namespaces());
	namespaces
}
