#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/gdata-parsable/0.1.0")]
//! This library maps GData / Atom XML elements to plain data types and back.
//!
//! A type describes its element with a `TypeDescriptor`: the element name and a chain of `Hooks`.
//! A subtype (say a video entry) extends a base type (an Atom entry) by putting its own hooks in
//! front of the base hooks; the parse and serialize engines then call every level of the chain in
//! a fixed order:
//! - `pre_parse` and `post_parse` run from the base to the most derived level,
//! - each child element (or text) is offered to the most derived level first, and the first level
//!   accepting it wins,
//! - `pre_emit` and `emit` run from the base to the most derived level.
//!
//! XML no level recognizes is not an error: it is kept verbatim (together with the namespaces it
//! needs) in the object's `ExtraContent` and written back on serialization, so documents survive
//! a round trip even if only parts of them are understood.
//!
//! Errors name the location of the offending element, like `<entry/author/name>`.
//!
//! XML is read with [`quick-xml`](https://crates.io/crates/quick-xml).

pub mod atom;
pub mod errors;
pub mod extra;
pub mod namespaces;
pub mod parser;
pub mod path;
mod reader;
pub mod serializer;
pub mod timestamp;
mod traits;
pub mod tree;

pub use self::errors::Error;
/// Result alias with our error type included
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test_types;

pub use self::{
	extra::ExtraContent,
	namespaces::Namespaces,
	timestamp::Timestamp,
	traits::{
		Hooks,
		ParseResult,
		Parsable,
		TypeDescriptor,
	},
};
