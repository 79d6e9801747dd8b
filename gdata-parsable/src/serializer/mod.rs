//! Serialize objects to XML text
//!
//! The engine writes the element itself; hooks only add attributes (`Hooks::pre_emit` through an
//! `AttributeWriter`) and content (`Hooks::emit` through a `ContentWriter`). Both writers escape
//! everything passed to them; `escape_text` and `escape_attribute` are exposed for hooks
//! building raw fragments.

mod core;
mod element;
mod escape;

pub use self::{
	core::{
		AttributeWriter,
		ContentWriter,
	},
	element::{
		serialize,
		serialize_document,
		serialize_fragment,
	},
	escape::{
		escape_attribute,
		escape_text,
	},
};
