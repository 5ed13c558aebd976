// Entity aggregation across detector types.
//
// Each type's match list is walked independently with its own forward
// cursor, but all types share one claimed-starts set so two matches can
// never resolve to the same occurrence, even across types. The combined
// list is then sorted by start offset for the rewriters.

use crate::detection::{DetectionError, DetectionResult};
use crate::entity::Entity;
use crate::locator::{self, SeenStarts};

/// Locate every matched substring of every entity type and return the
/// combined entity list, sorted by start offset.
///
/// Matches that could not be located are kept with null spans and sort
/// after all located entities. The sort is stable, so entities sharing a
/// sort key keep the order they were built in.
pub fn aggregate(detection: &DetectionResult) -> Result<Vec<Entity>, DetectionError> {
	let (text, per_type) = detection.single()?;
	let chars: Vec<char> = text.chars().collect();

	let mut seen = SeenStarts::new();
	let mut entities = Vec::new();
	for (entity_type, matches) in per_type {
		entities.extend(build_for_type(&chars, entity_type, matches, &mut seen));
	}

	entities.sort_by_key(|e| e.start.unwrap_or(usize::MAX));

	tracing::debug!(
		types = per_type.len(),
		entities = entities.len(),
		unlocated = entities.iter().filter(|e| e.start.is_none()).count(),
		"aggregated detector matches"
	);
	Ok(entities)
}

/// Walk one type's ordered match list against the text.
///
/// The cursor resumes one past the previous span's end, so duplicate
/// matches claim successive occurrences. When a match cannot be located the
/// cursor still advances by one character; a bad match slightly narrows the
/// window for the rest of its list but never stalls the walk.
pub(crate) fn build_for_type(
	text: &[char],
	entity_type: &str,
	matches: &[String],
	seen: &mut SeenStarts,
) -> Vec<Entity> {
	let mut entities = Vec::with_capacity(matches.len());
	let mut search_from = 0usize;

	for matched in matches {
		let needle: Vec<char> = matched.chars().collect();
		let span = locator::locate_in(text, search_from, &needle, seen);
		match span {
			Some(span) => search_from = span.end + 1,
			None => {
				tracing::warn!(
					%entity_type,
					needle = %matched,
					search_from,
					"matched substring could not be located, recording a null span"
				);
				search_from += 1;
			},
		}
		entities.push(Entity::new(matched.as_str(), entity_type, span));
	}

	entities
}
