// Detector output contract.
//
// The NER collaborator answers one request with the original text mapped to
// per-type lists of matched substrings, carrying no position information.
// Match order is meaningful (matches are consumed left to right by a
// forward-moving cursor), so both map levels preserve insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered matched substrings per entity type, as emitted by the detector.
pub type TypeMatches = IndexMap<String, Vec<String>>;

/// Raw detector output for a single request: the original text mapped to
/// its per-type matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionResult(IndexMap<String, TypeMatches>);

impl DetectionResult {
	pub fn new(text: impl Into<String>, matches: TypeMatches) -> Self {
		let mut map = IndexMap::new();
		map.insert(text.into(), matches);
		Self(map)
	}

	/// The single text entry this request is about.
	///
	/// The detector is trusted to send exactly one entry per request. An
	/// empty result is a collaborator bug and fails fast; extra entries are
	/// ignored in favor of the first.
	pub fn single(&self) -> Result<(&str, &TypeMatches), DetectionError> {
		let (text, matches) = self.0.get_index(0).ok_or(DetectionError::MissingText)?;
		if self.0.len() > 1 {
			tracing::warn!(
				entries = self.0.len(),
				"detection result carries more than one text entry, using the first"
			);
		}
		Ok((text.as_str(), matches))
	}
}

/// Violations of the detector collaborator contract.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DetectionError {
	/// The top-level original-text entry was absent entirely.
	#[error("detection result carries no original-text entry")]
	MissingText,
}
