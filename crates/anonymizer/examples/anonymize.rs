// Run a canned detection result through all three operations.
//
// The NER detector is an external collaborator, so its output is inlined
// here; this binary only exercises span location and rewriting:
//
//     cargo run -p anonymizer --example anonymize

use anonymizer::{DetectionResult, Error, Salt, TypeMatches, annotate, anonymize, encode};

fn main() -> Result<(), Error> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let text = "My name is Peter Parker. I live in Queens, NYC. I work at the Daily Bugle.";
	let mut matches = TypeMatches::new();
	matches.insert("PER".into(), vec!["Peter Parker".into()]);
	matches.insert("LOC".into(), vec!["Queens".into(), "NYC".into()]);
	matches.insert("ORG".into(), vec!["the Daily Bugle".into()]);
	let detection = DetectionResult::new(text, matches);

	let annotated = annotate(&detection)?;
	println!("annotate:");
	println!("{}\n", serde_json::to_string_pretty(&annotated).expect("serializable"));

	let anonymized = anonymize(&detection)?;
	println!("anonymize:");
	println!("{}\n", serde_json::to_string_pretty(&anonymized).expect("serializable"));

	let salt = Salt::new("an example salt!")?;
	let encoded = encode(&detection, &salt)?;
	println!("encode:");
	println!("{}", serde_json::to_string_pretty(&encoded).expect("serializable"));

	Ok(())
}
