use super::{connector_str_hash, pair_hash, string_hash};

#[test]
fn test_connector_str_hash_known_values() {
	assert_eq!(connector_str_hash(""), 0);
	assert_eq!(connector_str_hash("a"), 0xCA2E_9442);
	assert_eq!(connector_str_hash("AB"), 402_187_934);
}

#[test]
fn test_string_hash_known_values() {
	assert_eq!(string_hash(""), 5381);
	assert_eq!(string_hash("a"), 177_670);
	assert_eq!(string_hash("Ss"), 5_862_763);
}

#[test]
fn test_pair_hash_stays_in_table() {
	for size in [1usize, 2, 64, 1024] {
		for lw in 0..8 {
			let h = pair_hash(size, lw, lw + 3, 17, 42, 1);
			assert!(h < size, "hash {h} escapes table of {size}");
		}
	}
}

#[test]
fn test_pair_hash_depends_on_connectors() {
	let a = pair_hash(1 << 16, 1, 5, 10, 20, 0);
	let b = pair_hash(1 << 16, 1, 5, 20, 10, 0);
	assert_ne!(a, b);
}
