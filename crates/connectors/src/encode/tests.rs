use pretty_assertions::assert_eq;

use super::{ConnectorInfo, HeadDependent, LC_BITS, LC_MASK, MAX_LC_LETTERS, encode};
use crate::error::EncodeError;
use crate::hash::connector_str_hash;

#[test]
fn test_packed_width_holds_nine_letters() {
	assert_eq!(MAX_LC_LETTERS, 9);
	assert_eq!(LC_MASK, 0x7f);
}

#[test]
fn test_encode_plain_core() {
	let info = encode("AB").unwrap();
	assert_eq!(
		info,
		ConnectorInfo {
			head_dependent: HeadDependent::None,
			uc_start: 0,
			uc_length: 2,
			uc_hash: connector_str_hash("AB"),
			lc_letters: 0,
			lc_mask: 0,
		}
	);
}

#[test]
fn test_encode_marker_and_suffix() {
	let info = encode("hSs").unwrap();
	assert_eq!(info.head_dependent, HeadDependent::Head);
	assert_eq!(info.uc_start, 1);
	assert_eq!(info.uc_length, 1);
	assert_eq!(info.uc_part("hSs"), "S");
	assert_eq!(info.lc_part("hSs"), "s");
	assert_eq!(info.lc_letters, u64::from(b's'));
	assert_eq!(info.lc_mask, LC_MASK);
}

#[test]
fn test_encode_dependent_marker() {
	assert_eq!(encode("dMX").unwrap().head_dependent, HeadDependent::Dependent);
}

#[test]
fn test_wildcards_clear_the_mask() {
	let info = encode("Ox*y").unwrap();
	let y_shift = 2 * LC_BITS;
	assert_eq!(info.lc_letters, u64::from(b'x') | (u64::from(b'y') << y_shift));
	assert_eq!(info.lc_mask, LC_MASK | (LC_MASK << y_shift));

	let star = encode("O*").unwrap();
	assert_eq!(star.lc_mask, 0);
	assert_eq!(star.lc_letters, 0);
}

#[test]
fn test_core_hash_ignores_marker_and_suffix() {
	let a = encode("hMVa").unwrap();
	let b = encode("MVp").unwrap();
	assert_eq!(a.uc_hash, b.uc_hash);
}

#[test]
fn test_nine_letter_suffix_fits() {
	let info = encode("Xabcdefghi").unwrap();
	assert_eq!(info.lc_mask.count_ones(), 63);
}

#[test]
fn test_ten_letter_suffix_is_rejected() {
	assert_eq!(
		encode("Xabcdefghij"),
		Err(EncodeError::SuffixTooLong {
			string: "Xabcdefghij".into(),
			len: 10,
		})
	);
}

#[test]
fn test_malformed_strings() {
	assert_eq!(encode(""), Err(EncodeError::Empty));
	assert_eq!(encode("h"), Err(EncodeError::EmptyCore { string: "h".into() }));
	assert_eq!(encode("abc"), Err(EncodeError::InvalidMarker {
		string: "abc".into(),
		marker: 'a',
	}));
	assert_eq!(encode("hd"), Err(EncodeError::EmptyCore { string: "hd".into() }));
	assert_eq!(encode("*S"), Err(EncodeError::EmptyCore { string: "*S".into() }));
	assert_eq!(encode("AB1"), Err(EncodeError::InvalidChar {
		string: "AB1".into(),
		ch: '1',
		pos: 2,
	}));
	assert_eq!(encode("ABcD"), Err(EncodeError::InvalidChar {
		string: "ABcD".into(),
		ch: 'D',
		pos: 3,
	}));
}

#[test]
fn test_core_length_limit() {
	let long = "A".repeat(256);
	assert_eq!(encode(&long), Err(EncodeError::CoreTooLong { string: long.clone() }));
	assert!(encode(&long[..255]).is_ok());
}

#[test]
fn test_head_dependent_exclusion_table() {
	use HeadDependent::{Dependent, Head};
	assert!(Head.excludes(Head));
	assert!(Dependent.excludes(Dependent));
	assert!(!Head.excludes(Dependent));
	assert!(!HeadDependent::None.excludes(HeadDependent::None));
	assert!(!HeadDependent::None.excludes(Head));
	assert!(!Dependent.excludes(HeadDependent::None));
}
