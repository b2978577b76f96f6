#![allow(dead_code)]

use lgram_string_set::{Istr, StringSet};

use crate::error::TableError;
use crate::length_limit::{LengthLimitRegistry, LengthLimitRule};
use crate::matching::{easy_match, easy_match_desc};
use crate::table::{ConTable, MIN_TABLE_SIZE};

/// Connector names with every combination of marker, shared cores and suffix shapes.
fn sample_names() -> Vec<String> {
	let mut names = Vec::new();
	for marker in ["", "h", "d"] {
		for core in ["S", "SI", "MV", "O"] {
			for suffix in ["", "s", "p", "*", "sx", "*x", "pa*"] {
				names.push(format!("{marker}{core}{suffix}"));
			}
		}
	}
	names
}

fn grouped(names: &[String]) -> ConTable {
	let mut strings = StringSet::new();
	let mut table = ConTable::new();
	for n in names {
		table.intern(&strings.add(n)).unwrap();
	}
	table.sort_by_core();
	table
}

/// Invariant: interning the same string twice yields the same descriptor.
pub(crate) fn inv_interning_idempotence() {
	let mut strings = StringSet::new();
	let mut table = ConTable::new();
	let names = sample_names();

	let first: Vec<_> = names.iter().map(|n| table.intern(&strings.add(n)).unwrap()).collect();
	let second: Vec<_> = names.iter().map(|n| table.intern(&strings.add(n)).unwrap()).collect();

	assert_eq!(first, second);
	assert_eq!(table.len(), names.len());
	for (name, id) in names.iter().zip(&first) {
		assert_eq!(table.lookup(name), Some(*id));
		assert_eq!(table[*id].string().as_str(), name);
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_interning_idempotence() {
	inv_interning_idempotence()
}

/// Invariant: growth keeps every descriptor reachable under its original id.
pub(crate) fn inv_growth_preserves_membership() {
	let mut strings = StringSet::new();
	let mut table = ConTable::with_expected_count(MIN_TABLE_SIZE);
	let names: Vec<Istr> = (0..2000).map(|n| strings.add(&format!("ID{}", to_upper_code(n)))).collect();

	let mut ids = Vec::with_capacity(names.len());
	let mut grows = 0;
	let mut capacity = table.capacity();
	for name in &names {
		ids.push(table.intern(name).unwrap());
		if table.capacity() != capacity {
			grows += 1;
			capacity = table.capacity();
		}
		assert!(table.capacity().is_power_of_two());
		assert!(8 * table.len() <= 3 * table.capacity());
	}

	assert!(grows >= 5, "expected several growths, saw {grows}");
	for (name, id) in names.iter().zip(&ids) {
		assert_eq!(table.intern(name).unwrap(), *id);
	}
}

/// Spells `n` in uppercase letters so every generated name is a valid core.
fn to_upper_code(mut n: usize) -> String {
	let mut s = String::new();
	loop {
		s.push(char::from(b'A' + (n % 26) as u8));
		n /= 26;
		if n == 0 {
			return s;
		}
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_growth_preserves_membership() {
	inv_growth_preserves_membership()
}

/// Invariant: core ids partition descriptors exactly by uppercase core.
pub(crate) fn inv_core_id_partition() {
	let table = grouped(&sample_names());
	let all: Vec<_> = table.iter().collect();
	for (_, a) in &all {
		for (_, b) in &all {
			assert_eq!(
				a.core_id() == b.core_id(),
				a.uc_part() == b.uc_part(),
				"{:?} vs {:?}",
				a.string(),
				b.string()
			);
		}
	}
	assert_eq!(table.num_uc(), 4);

	let sorted = table.sorted().unwrap();
	for pair in sorted.windows(2) {
		let (a, b) = (&table[pair[0]], &table[pair[1]]);
		assert!(a.uc_part() <= b.uc_part());
		assert!(a.core_id() <= b.core_id());
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_core_id_partition() {
	inv_core_id_partition()
}

/// Invariant: the descriptor fast path agrees with the raw-string predicate and both are symmetric.
pub(crate) fn inv_match_forms_agree() {
	let table = grouped(&sample_names());
	for (_, a) in table.iter() {
		for (_, b) in table.iter() {
			let raw = easy_match(a.string(), b.string());
			assert_eq!(raw, easy_match(b.string(), a.string()));
			assert_eq!(
				easy_match_desc(a, b),
				raw,
				"{:?} vs {:?}",
				a.string(),
				b.string()
			);
		}
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_match_forms_agree() {
	inv_match_forms_agree()
}

/// Invariant: a grouped table accepts no new descriptors but still resolves known ones.
pub(crate) fn inv_frozen_after_grouping() {
	let mut strings = StringSet::new();
	let mut table = ConTable::new();
	let ss = strings.add("Ss");
	let id = table.intern(&ss).unwrap();
	table.sort_by_core();

	assert_eq!(table.intern(&ss), Ok(id));
	assert_eq!(
		table.intern(&strings.add("Sp")),
		Err(TableError::Frozen { string: "Sp".into() })
	);
	assert_eq!(table.len(), 1);
	assert_eq!(table[id].core_id(), Some(0));
}

#[cfg_attr(test, test)]
pub(crate) fn test_frozen_after_grouping() {
	inv_frozen_after_grouping()
}

/// Invariant: the last applicable length-limit rule wins.
pub(crate) fn inv_length_limit_precedence() {
	let mut table = grouped(&["MVp".to_owned()]);
	let mut reg = LengthLimitRegistry::new();
	reg.push(LengthLimitRule::new(["MV"], 4).unwrap());
	reg.push(LengthLimitRule::new(["MV*"], 6).unwrap());
	reg.apply(&mut table).unwrap();

	let id = table.lookup("MVp").unwrap();
	assert_eq!(table[id].length_limit(), 6);
}

#[cfg_attr(test, test)]
pub(crate) fn test_length_limit_precedence() {
	inv_length_limit_precedence()
}
