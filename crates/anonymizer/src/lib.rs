//! Position-annotated PII entities and anonymizing text rewrites.
//!
//! The upstream NER detector reports WHICH substrings matched per entity
//! type, but not WHERE. This crate recovers a correct, non-overlapping
//! character span for every reported match and rewrites the text around
//! them in two modes: irreversible masking (`[PER]`) and reversible
//! encoding (`[<salted md5>]` plus a lookup table keyed by digest). A third
//! operation, annotation, returns the located entities without rewriting.
//!
//! ```
//! use anonymizer::{DetectionResult, TypeMatches, anonymize};
//!
//! let mut matches = TypeMatches::new();
//! matches.insert("PER".into(), vec!["Peter Parker".into()]);
//! let detection = DetectionResult::new("My name is Peter Parker.", matches);
//!
//! let response = anonymize(&detection).unwrap();
//! assert_eq!(response.text, "My name is [PER].");
//! ```

mod aggregate;
mod detection;
mod entity;
mod locator;
mod response;
mod transform;

pub use aggregate::aggregate;
pub use detection::{DetectionError, DetectionResult, TypeMatches};
pub use entity::{Entity, Span};
pub use locator::{SeenStarts, locate};
pub use response::{
	AnnotateResponse, AnonymizeResponse, EncodeResponse, annotate, anonymize, encode,
};
pub use transform::{LookupEntry, LookupTable, Salt, SaltError, encode_entities, mask_entities};

/// Errors surfaced by the top-level operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Detection(#[from] DetectionError),
	#[error(transparent)]
	Salt(#[from] SaltError),
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
