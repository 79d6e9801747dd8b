//! Atom building blocks shared by all GData formats
//!
//! Service specific entry types embed an `Entry` and put `EntryHooks` at the base of their hook
//! chain.

mod author;
mod category;
mod entry;

pub use self::{
	author::Author,
	category::Category,
	entry::{
		Entry,
		EntryHooks,
	},
};
