// Irreversible masking: spans collapse to bracketed type labels.

use crate::entity::Entity;

use super::rewrite;

/// Replace every located entity span in `text` with `[TYPE]`.
///
/// Entities must be in ascending start order, which is how the aggregator
/// returns them. Unlocated entities are skipped.
pub fn mask_entities(entities: &[Entity], text: &str) -> String {
	rewrite(entities, text, |entity| format!("[{}]", entity.entity_type))
}
