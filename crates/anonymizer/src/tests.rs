use assert_matches::assert_matches;

use super::*;

fn detection(text: &str, matches: &[(&str, &[&str])]) -> DetectionResult {
	let mut per_type = TypeMatches::new();
	for (entity_type, list) in matches {
		per_type.insert(
			entity_type.to_string(),
			list.iter().map(|m| m.to_string()).collect(),
		);
	}
	DetectionResult::new(text, per_type)
}

fn peter_parker() -> DetectionResult {
	detection(
		"My name is Peter Parker. I live in Queens, NYC. I work at the Daily Bugle.",
		&[
			("PER", &["Peter Parker"]),
			("LOC", &["Queens", "NYC"]),
			("ORG", &["the Daily Bugle"]),
		],
	)
}

#[test]
fn test_annotate_end_to_end() {
	let response = annotate(&peter_parker()).unwrap();

	let summary: Vec<(&str, &str, Option<usize>, Option<usize>)> = response
		.entities
		.iter()
		.map(|e| (e.entity_type.as_str(), e.text.as_str(), e.start, e.end))
		.collect();
	assert_eq!(
		summary,
		[
			("PER", "Peter Parker", Some(11), Some(23)),
			("LOC", "Queens", Some(35), Some(41)),
			("LOC", "NYC", Some(43), Some(46)),
			("ORG", "the Daily Bugle", Some(58), Some(73)),
		]
	);
}

#[test]
fn test_anonymize_end_to_end() {
	let response = anonymize(&peter_parker()).unwrap();
	assert_eq!(
		response.text,
		"My name is [PER]. I live in [LOC], [LOC]. I work at [ORG]."
	);
	// The entity list rides along unchanged, with original-text offsets.
	assert_eq!(response.entities[3].span(), Some(Span { start: 58, end: 73 }));
}

#[test]
fn test_encode_end_to_end() {
	let salt = Salt::new("0123456789abcdef!").unwrap();
	let response = encode(&peter_parker(), &salt).unwrap();

	// No PII survives in the text; every span became a bracketed digest.
	for pii in ["Peter Parker", "Queens", "NYC", "the Daily Bugle"] {
		assert!(!response.text.contains(pii), "{pii} leaked: {}", response.text);
	}
	assert_eq!(response.lookup_table.len(), 4);
	for (digest, entry) in &response.lookup_table {
		assert_eq!(digest.len(), 32);
		assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
		assert!(response.text.contains(&format!("[{digest}]")));
		assert!(!entry.text.is_empty());
	}
}

#[test]
fn test_unlocated_matches_survive_to_the_payload() {
	let response = annotate(&detection(
		"Kaladin works for Apple",
		&[("ORG", &["Atlantis Corp", "Apple"])],
	))
	.unwrap();

	let value = serde_json::to_value(&response).unwrap();
	assert_eq!(
		value["entities"][1],
		serde_json::json!({
			"text": "Atlantis Corp",
			"start": null,
			"end": null,
			"type": "ORG",
		})
	);
}

#[test]
fn test_empty_detection_entry_is_an_error() {
	let empty = DetectionResult::default();
	assert_matches!(annotate(&empty), Err(Error::Detection(DetectionError::MissingText)));
	assert_matches!(anonymize(&empty), Err(Error::Detection(DetectionError::MissingText)));
}

#[test]
fn test_salt_errors_convert_into_the_crate_error() {
	fn build(value: &str) -> Result<Salt, Error> {
		Ok(Salt::new(value)?)
	}
	assert_matches!(build("too short"), Err(Error::Salt(SaltError::TooShort { .. })));
	assert_matches!(build("0123456789abcdef"), Ok(_));
}

#[test]
fn test_pipeline_counts_characters_not_bytes() {
	let response = anonymize(&detection(
		"Zoë lives in São Paulo.",
		&[("PER", &["Zoë"]), ("LOC", &["São Paulo"])],
	))
	.unwrap();

	assert_eq!(response.text, "[PER] lives in [LOC].");
	assert_eq!(response.entities[1].span(), Some(Span { start: 13, end: 22 }));
}

#[test]
fn test_text_without_matches_passes_through() {
	let response = anonymize(&detection("no entities here", &[])).unwrap();
	assert_eq!(response.text, "no entities here");
	assert!(response.entities.is_empty());
}
