// Entity records produced by span location.
//
// An entity pairs a detector-reported substring with the half-open character
// span where it was claimed in the original text. Offsets count characters
// (code points), not bytes; the two only coincide for ASCII input.

use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` character range in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
	pub start: usize,
	pub end: usize,
}

impl Span {
	/// Number of characters covered.
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	pub fn is_empty(&self) -> bool {
		self.end == self.start
	}
}

/// A single detected PII occurrence, positioned in the original text.
///
/// `start` and `end` are both `None` when the text was exhausted without a
/// valid occurrence of the match. Such entities still appear in output so
/// callers can see everything the detector reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
	/// The matched substring, exactly as the detector reported it.
	pub text: String,
	/// 0-based character offset of the first character, if located.
	pub start: Option<usize>,
	/// Offset one past the last character, if located.
	pub end: Option<usize>,
	/// Detector-assigned entity type, e.g. "PER" or "LOC".
	#[serde(rename = "type")]
	pub entity_type: String,
}

impl Entity {
	pub fn new(text: impl Into<String>, entity_type: impl Into<String>, span: Option<Span>) -> Self {
		Self {
			text: text.into(),
			start: span.map(|s| s.start),
			end: span.map(|s| s.end),
			entity_type: entity_type.into(),
		}
	}

	/// The located span, if there is one.
	pub fn span(&self) -> Option<Span> {
		match (self.start, self.end) {
			(Some(start), Some(end)) => Some(Span { start, end }),
			_ => None,
		}
	}
}
