// Span location for detector matches.
//
// The upstream detector reports WHICH substrings matched, not WHERE. Spans
// are recovered by literal search over the original text, with two rules on
// top of plain substring search:
//
// - a candidate whose neighboring character is alphanumeric is rejected, so
//   "sam" never claims the inside of "samovar" or "ed" the tail of "stopped"
// - a candidate whose start offset was already claimed in this request is
//   rejected, so repeated matches walk forward instead of piling up on the
//   first occurrence

use std::collections::HashSet;

use crate::entity::Span;

/// Start offsets already claimed by located matches within one request.
/// Shared across entity types of the same text, never across texts.
pub type SeenStarts = HashSet<usize>;

/// Find the next valid occurrence of `needle` in `text` at or after the
/// `search_from` character offset, claiming its start in `seen`.
///
/// All offsets are character offsets, not byte offsets. Returns `None` once
/// the text is exhausted without a valid occurrence; `seen` is only mutated
/// when a span is accepted.
pub fn locate(text: &str, search_from: usize, needle: &str, seen: &mut SeenStarts) -> Option<Span> {
	let chars: Vec<char> = text.chars().collect();
	let needle: Vec<char> = needle.chars().collect();
	locate_in(&chars, search_from, &needle, seen)
}

/// Character-buffer form of [`locate`], used by the aggregator so the text
/// is collected once per request instead of once per match.
pub(crate) fn locate_in(
	text: &[char],
	mut search_from: usize,
	needle: &[char],
	seen: &mut SeenStarts,
) -> Option<Span> {
	if needle.is_empty() {
		return None;
	}

	while let Some(start) = find_from(text, search_from, needle) {
		let end = start + needle.len();

		if start > 0 && text[start - 1].is_alphanumeric() {
			// Suffix of a longer token.
			search_from = start + 1;
			continue;
		}
		if end < text.len() && text[end].is_alphanumeric() {
			// Prefix of a longer token.
			search_from = start + 1;
			continue;
		}
		if seen.contains(&start) {
			// Occurrence already claimed by an earlier match.
			search_from = start + 1;
			continue;
		}

		seen.insert(start);
		return Some(Span { start, end });
	}

	None
}

/// First index `i >= from` where `needle` occurs in `text`.
fn find_from(text: &[char], from: usize, needle: &[char]) -> Option<usize> {
	let last = text.len().checked_sub(needle.len())?;
	(from..=last).find(|&i| text[i..i + needle.len()] == *needle)
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("he saw a cat", "cat", 0, 9, 12)]
	#[case("the samovar belongs to sam", "sam", 0, 23, 26)]
	#[case("He stopped ed from jumping", "ed", 0, 11, 13)]
	#[case("sam", "sam", 0, 0, 3)]
	#[case("agent 007 reporting", "007", 0, 6, 9)]
	#[case("sam here sam", "sam", 4, 9, 12)]
	fn test_locate_accepts_whole_tokens(
		#[case] text: &str,
		#[case] needle: &str,
		#[case] from: usize,
		#[case] start: usize,
		#[case] end: usize,
	) {
		let mut seen = SeenStarts::new();
		let span = locate(text, from, needle, &mut seen);
		assert_eq!(span, Some(Span { start, end }));
		assert!(seen.contains(&start));
	}

	#[rstest]
	#[case("the samovar hums", "sam", 0)]
	#[case("x007y", "007", 0)]
	#[case("hello world", "zzz", 0)]
	#[case("sam here", "sam", 4)] // search starts past the only occurrence
	fn test_locate_rejects_embedded_or_absent(
		#[case] text: &str,
		#[case] needle: &str,
		#[case] from: usize,
	) {
		let mut seen = SeenStarts::new();
		assert_eq!(locate(text, from, needle, &mut seen), None);
		assert!(seen.is_empty());
	}

	#[test]
	fn test_locate_skips_claimed_starts() {
		let text = "Kaladin works for Apple on the main Apple campus";
		let mut seen = SeenStarts::from([18]);
		let span = locate(text, 0, "Apple", &mut seen);
		assert_eq!(span, Some(Span { start: 36, end: 41 }));
		assert!(seen.contains(&36));
	}

	#[test]
	fn test_locate_counts_characters_not_bytes() {
		let text = "le café de sam";
		let mut seen = SeenStarts::new();
		assert_eq!(
			locate(text, 0, "café", &mut seen),
			Some(Span { start: 3, end: 7 })
		);
		// Past the two-byte é, character and byte offsets diverge.
		assert_eq!(
			locate(text, 0, "sam", &mut seen),
			Some(Span { start: 11, end: 14 })
		);
		// "caf" is a prefix of "café"; é is alphanumeric, so no match.
		let mut fresh = SeenStarts::new();
		assert_eq!(locate(text, 0, "caf", &mut fresh), None);
	}

	#[test]
	fn test_locate_empty_needle_never_matches() {
		let mut seen = SeenStarts::new();
		assert_eq!(locate("anything", 0, "", &mut seen), None);
		assert!(seen.is_empty());
	}

	#[test]
	fn test_locate_needle_longer_than_text() {
		let mut seen = SeenStarts::new();
		assert_eq!(locate("sam", 0, "samovar", &mut seen), None);
	}

	#[test]
	fn test_locate_same_needle_advances_over_claims() {
		let text = "NYC or NYC";
		let mut seen = SeenStarts::new();
		let first = locate(text, 0, "NYC", &mut seen);
		assert_eq!(first, Some(Span { start: 0, end: 3 }));
		// Same needle from the top again: start 0 is claimed, next is taken.
		let second = locate(text, 0, "NYC", &mut seen);
		assert_eq!(second, Some(Span { start: 7, end: 10 }));
		let third = locate(text, 0, "NYC", &mut seen);
		assert_eq!(third, None);
	}
}
