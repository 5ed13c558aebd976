// Response payloads for the three ways detector output is served.
//
// These are wire shapes: field names and null handling are part of the
// contract with downstream consumers, not implementation detail.

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::aggregate;
use crate::detection::DetectionResult;
use crate::entity::Entity;
use crate::transform::{self, LookupTable, Salt};

/// Annotation payload: every detected entity with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotateResponse {
	pub entities: Vec<Entity>,
}

/// Irreversible anonymization payload: masked text plus the entities that
/// were substituted into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymizeResponse {
	pub text: String,
	pub entities: Vec<Entity>,
}

/// Reversible anonymization payload: encoded text plus the lookup table
/// needed to reverse it. The table is as sensitive as the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeResponse {
	pub text: String,
	pub lookup_table: LookupTable,
}

/// Locate every detected entity in the original text.
pub fn annotate(detection: &DetectionResult) -> Result<AnnotateResponse, Error> {
	let entities = aggregate::aggregate(detection)?;
	Ok(AnnotateResponse { entities })
}

/// Replace every located entity with its `[TYPE]` label, irreversibly.
pub fn anonymize(detection: &DetectionResult) -> Result<AnonymizeResponse, Error> {
	let (text, _) = detection.single()?;
	let entities = aggregate::aggregate(detection)?;
	let masked = transform::mask_entities(&entities, text);
	Ok(AnonymizeResponse {
		text: masked,
		entities,
	})
}

/// Replace every located entity with a salted digest and return the
/// reversal table alongside the encoded text.
pub fn encode(detection: &DetectionResult, salt: &Salt) -> Result<EncodeResponse, Error> {
	let (text, _) = detection.single()?;
	let entities = aggregate::aggregate(detection)?;
	let (encoded, lookup_table) = transform::encode_entities(&entities, text, salt.expose());
	Ok(EncodeResponse {
		text: encoded,
		lookup_table,
	})
}
