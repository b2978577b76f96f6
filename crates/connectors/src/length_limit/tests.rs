use pretty_assertions::assert_eq;

use super::{LengthLimitRegistry, LengthLimitRule};
use crate::UNLIMITED_LEN;
use crate::error::{EncodeError, LimitError, TableError};
use crate::test_fixtures::{desc, grouped_table, table_of};

#[test]
fn test_later_rule_wins() {
	let (_s, mut table) = grouped_table(&["MVp", "Ss"]);
	let mut reg = LengthLimitRegistry::new();
	reg.push(LengthLimitRule::new(["MV"], 4).unwrap());
	reg.push(LengthLimitRule::new(["MVp"], 6).unwrap());
	reg.apply(&mut table).unwrap();

	assert_eq!(desc(&table, "MVp").length_limit(), 6);
}

#[test]
fn test_declaration_order_is_significant() {
	let (_s, mut table) = grouped_table(&["MVp"]);
	let mut reg = LengthLimitRegistry::new();
	reg.push(LengthLimitRule::new(["MVp"], 6).unwrap());
	reg.push(LengthLimitRule::new(["MV"], 4).unwrap());
	reg.apply(&mut table).unwrap();

	assert_eq!(desc(&table, "MVp").length_limit(), 4);
}

#[test]
fn test_pattern_matching_follows_connector_rules() {
	let (_s, mut table) = grouped_table(&["Ss", "Sp", "S", "SI", "hSs", "dSs"]);
	let mut reg = LengthLimitRegistry::new();
	reg.push(LengthLimitRule::new(["Ss"], 3).unwrap());
	reg.push(LengthLimitRule::new(["UNLIMITEDX"], UNLIMITED_LEN).unwrap());
	reg.apply(&mut table).unwrap();

	assert_eq!(desc(&table, "Ss").length_limit(), 3);
	assert_eq!(desc(&table, "S").length_limit(), 3);
	assert_eq!(desc(&table, "hSs").length_limit(), 3);
	assert_eq!(desc(&table, "dSs").length_limit(), 3);
	assert_eq!(desc(&table, "Sp").length_limit(), 0);
	assert_eq!(desc(&table, "SI").length_limit(), 0);
}

#[test]
fn test_marked_pattern_only_hits_same_marker() {
	let (_s, mut table) = grouped_table(&["hA", "dA", "A"]);
	let mut reg = LengthLimitRegistry::new();
	reg.push(LengthLimitRule::new(["hA"], 2).unwrap());
	reg.apply(&mut table).unwrap();

	assert_eq!(desc(&table, "hA").length_limit(), 2);
	assert_eq!(desc(&table, "dA").length_limit(), UNLIMITED_LEN);
	assert_eq!(desc(&table, "A").length_limit(), UNLIMITED_LEN);
}

#[test]
fn test_without_unlimited_rule_rest_is_unlimited() {
	let (_s, mut table) = grouped_table(&["YS", "Wd", "O*"]);
	let mut reg = LengthLimitRegistry::new();
	reg.push(LengthLimitRule::from_define("LENGTH-LIMIT-1", ["YS"]).unwrap());
	reg.apply(&mut table).unwrap();

	assert_eq!(desc(&table, "YS").length_limit(), 1);
	assert_eq!(desc(&table, "Wd").length_limit(), UNLIMITED_LEN);
	assert_eq!(desc(&table, "O*").length_limit(), UNLIMITED_LEN);
}

#[test]
fn test_with_unlimited_rule_rest_uses_run_default() {
	let (_s, mut table) = grouped_table(&["YS", "Wd", "O*"]);
	let mut reg = LengthLimitRegistry::new();
	reg.push(LengthLimitRule::from_define("UNLIMITED-CONNECTORS", ["Wd"]).unwrap());
	reg.apply(&mut table).unwrap();

	assert_eq!(desc(&table, "Wd").length_limit(), UNLIMITED_LEN);
	assert_eq!(desc(&table, "YS").length_limit(), 0);
	assert_eq!(desc(&table, "O*").length_limit(), 0);
}

#[test]
fn test_apply_requires_grouping() {
	let (_s, mut table, _) = table_of(&["A"]);
	let reg = LengthLimitRegistry::new();
	assert_eq!(reg.apply(&mut table), Err(TableError::NotGrouped));
}

#[test]
fn test_from_define_names() {
	let rule = LengthLimitRule::from_define("LENGTH-LIMIT-3", ["A", "Bx"]).unwrap();
	assert_eq!(rule.limit(), 3);
	assert_eq!(rule.name(), Some("LENGTH-LIMIT-3"));
	assert_eq!(rule.patterns().collect::<Vec<_>>(), ["A", "Bx"]);

	let rule = LengthLimitRule::from_define("UNLIMITED-CONNECTORS", ["A"]).unwrap();
	assert_eq!(rule.limit(), UNLIMITED_LEN);

	assert_eq!(
		LengthLimitRule::from_define("LEFT-WALL", ["A"]),
		Err(LimitError::UnknownDefine { name: "LEFT-WALL".into() })
	);
	assert_eq!(
		LengthLimitRule::from_define("LENGTH-LIMIT-x", ["A"]),
		Err(LimitError::UnknownDefine { name: "LENGTH-LIMIT-x".into() })
	);
	assert_eq!(
		LengthLimitRule::from_define("LENGTH-LIMIT-0", ["A"]),
		Err(LimitError::OutOfRange { limit: 0 })
	);
	assert_eq!(
		LengthLimitRule::from_define("LENGTH-LIMIT-255", ["A"]),
		Err(LimitError::OutOfRange { limit: 255 })
	);
}

#[test]
fn test_bad_pattern_is_rejected() {
	assert_eq!(
		LengthLimitRule::new(["xA"], 2),
		Err(LimitError::Pattern(EncodeError::InvalidMarker {
			string: "xA".into(),
			marker: 'x',
		}))
	);
	assert_eq!(LengthLimitRule::new(["A"], 0), Err(LimitError::OutOfRange { limit: 0 }));
}
