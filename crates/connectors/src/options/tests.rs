use super::ParseOptions;
use crate::error::OptionsError;

#[test]
fn test_defaults() {
	let opts = ParseOptions::default();
	assert_eq!(opts.short_length, 16);
	assert!(!opts.all_short);
}

#[test]
fn test_from_toml_fills_missing_fields() {
	let opts = ParseOptions::from_toml_str("all_short = true").unwrap();
	assert_eq!(opts, ParseOptions::default().with_all_short(true));

	let opts = ParseOptions::from_toml_str("").unwrap();
	assert_eq!(opts, ParseOptions::default());
}

#[test]
fn test_from_toml_reads_all_fields() {
	let opts = ParseOptions::from_toml_str(
		r#"
		short_length = 7
		all_short = true
		"#,
	)
	.unwrap();
	assert_eq!(opts.short_length, 7);
	assert!(opts.all_short);
}

#[test]
fn test_short_length_range() {
	assert!(matches!(
		ParseOptions::from_toml_str("short_length = 0"),
		Err(OptionsError::ShortLength { value: 0 })
	));
	assert!(matches!(
		ParseOptions::from_toml_str("short_length = 300"),
		Err(OptionsError::ShortLength { value: 300 })
	));
	assert_eq!(ParseOptions::from_toml_str("short_length = 255").unwrap().short_length, 255);
}

#[test]
fn test_unknown_field_is_rejected() {
	assert!(matches!(
		ParseOptions::from_toml_str("shortlength = 3"),
		Err(OptionsError::Toml(_))
	));
}
