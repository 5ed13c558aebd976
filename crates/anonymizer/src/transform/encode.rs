// Reversible encoding: spans collapse to salted digests, and a lookup table
// maps each digest back to the entity it replaced.
//
// digest = lowercase hex md5(type || text || salt). Identical (type, text)
// pairs yield the same digest; the later entity overwrites the earlier
// lookup entry, which is harmless because the entries are equal.

use indexmap::IndexMap;
use md5::{Digest, Md5};
use secrecy::{ExposeSecret, SecretBox};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;

use super::rewrite;

/// Digest-keyed reversal table returned alongside encoded text.
pub type LookupTable = IndexMap<String, LookupEntry>;

/// The original entity behind one digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
	#[serde(rename = "type")]
	pub entity_type: String,
	pub text: String,
}

/// Caller-supplied digest salt, validated once at construction.
///
/// Length limits are checked here and nowhere else; holding a `Salt` is
/// proof the value was acceptable. The value is secret material: it is
/// zeroized on drop and never appears in debug output.
pub struct Salt(SecretBox<str>);

impl Salt {
	/// Minimum accepted length, in characters.
	pub const MIN_LEN: usize = 16;
	/// Maximum accepted length, in characters.
	pub const MAX_LEN: usize = 64;

	pub fn new(salt: impl Into<String>) -> Result<Self, SaltError> {
		let salt = salt.into();
		let len = salt.chars().count();
		if len < Self::MIN_LEN {
			return Err(SaltError::TooShort { len });
		}
		if len > Self::MAX_LEN {
			return Err(SaltError::TooLong { len });
		}
		Ok(Self(SecretBox::new(salt.into_boxed_str())))
	}

	/// Expose the salt for digest computation.
	pub fn expose(&self) -> &str {
		self.0.expose_secret()
	}
}

impl std::fmt::Debug for Salt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("Salt([REDACTED])")
	}
}

/// Salt length violations, reported at construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SaltError {
	#[error("salt is {len} characters, at least 16 required")]
	TooShort { len: usize },
	#[error("salt is {len} characters, at most 64 allowed")]
	TooLong { len: usize },
}

/// Replace every located entity span in `text` with `[digest]` and record
/// the digest in the returned lookup table.
///
/// Entities skipped by the rewrite (null or invalid spans) leave no table
/// entry, so the table reverses exactly what appears in the output.
pub fn encode_entities(entities: &[Entity], text: &str, salt: &str) -> (String, LookupTable) {
	let mut lookup = LookupTable::new();
	let encoded = rewrite(entities, text, |entity| {
		let digest = entity_digest(entity, salt);
		lookup.insert(
			digest.clone(),
			LookupEntry {
				entity_type: entity.entity_type.clone(),
				text: entity.text.clone(),
			},
		);
		format!("[{digest}]")
	});
	(encoded, lookup)
}

/// Lowercase hex md5 over `type || text || salt`.
fn entity_digest(entity: &Entity, salt: &str) -> String {
	let mut hasher = Md5::new();
	hasher.update(entity.entity_type.as_bytes());
	hasher.update(entity.text.as_bytes());
	hasher.update(salt.as_bytes());
	hex::encode(hasher.finalize())
}
