//! Text rewriting over located entities.
//!
//! Both rewrite modes replace entity spans in ascending start order while
//! substitutions shift every later offset. The shift is recomputed from the
//! original length after each substitution rather than accumulated, and it
//! can be negative when a placeholder is longer than the span it replaced.

mod encode;
mod mask;

pub use encode::{LookupEntry, LookupTable, Salt, SaltError, encode_entities};
pub use mask::mask_entities;

use crate::entity::Entity;

/// Replace each located entity span in `text` with the output of
/// `placeholder`, adjusting spans for earlier substitutions.
///
/// `placeholder` runs only for entities that are actually substituted.
/// Entities with null spans are skipped, as are entities whose adjusted
/// span no longer fits the current text (possible only for unsorted or
/// overlapping input, which the aggregator never produces).
fn rewrite<F>(entities: &[Entity], text: &str, mut placeholder: F) -> String
where
	F: FnMut(&Entity) -> String,
{
	let mut current: Vec<char> = text.chars().collect();
	let original_len = current.len() as isize;
	let mut offset: isize = 0;

	for entity in entities {
		let Some(span) = entity.span() else {
			continue;
		};

		let start = span.start as isize - offset;
		let end = span.end as isize - offset;
		if start < 0 || end < start || end > current.len() as isize {
			tracing::warn!(
				entity_type = %entity.entity_type,
				start = span.start,
				end = span.end,
				offset,
				"adjusted span falls outside the rewritten text, skipping substitution"
			);
			continue;
		}

		let replacement: Vec<char> = placeholder(entity).chars().collect();
		current.splice(start as usize..end as usize, replacement);
		offset = original_len - current.len() as isize;
	}

	current.into_iter().collect()
}
