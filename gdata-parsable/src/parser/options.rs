use bitflags::bitflags;

bitflags! {
	/// How the `*_from_element` helpers treat the element they match
	#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
	pub struct ParserOptions: u8 {
		/// Text content must be present
		const REQUIRED = 1 << 0;
		/// Text content must not be empty (or whitespace only)
		const NON_EMPTY = 1 << 1;
		/// The element is a singleton; a second occurrence is `Error::DuplicateElement`
		const NO_DUPES = 1 << 2;
		/// Content that can't be parsed is skipped instead of failing
		const IGNORE_ERROR = 1 << 3;
	}
}

impl Default for ParserOptions {
	fn default() -> Self {
		Self::empty()
	}
}
