//! ISO 8601 timestamps as used in `<updated>`, `<published>` and friends

use std::{
	fmt,
	str::FromStr,
};
use time::{
	format_description::well_known::{
		Iso8601,
		Rfc3339,
	},
	OffsetDateTime,
	PrimitiveDateTime,
};

/// Parsed timestamp which remembers how it was written
///
/// Serializing emits the original literal, so parsed documents round trip byte for byte.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Timestamp {
	value: OffsetDateTime,
	literal: String,
}

impl Timestamp {
	/// Parse an ISO 8601 timestamp; without offset it is taken as UTC.
	pub fn parse(literal: &str) -> Result<Self, time::error::Parse> {
		let value = OffsetDateTime::parse(literal, &Iso8601::DEFAULT)
			.or_else(|_| OffsetDateTime::parse(literal, &Rfc3339))
			.or_else(|_| PrimitiveDateTime::parse(literal, &Iso8601::DEFAULT).map(PrimitiveDateTime::assume_utc))?;
		Ok(Self {
			value,
			literal: literal.to_owned(),
		})
	}

	/// Wrap a point in time; it gets written in RFC 3339 format.
	pub fn from_datetime(value: OffsetDateTime) -> Result<Self, time::error::Format> {
		let literal = value.format(&Rfc3339)?;
		Ok(Self { value, literal })
	}

	/// Parsed point in time
	pub fn value(&self) -> OffsetDateTime {
		self.value
	}

	/// Text as it was parsed (or formatted)
	pub fn as_str(&self) -> &str {
		&self.literal
	}
}

impl FromStr for Timestamp {
	type Err = time::error::Parse;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for Timestamp {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.literal)
	}
}
