//! The connector match predicate.
//!
//! Two connectors link iff:
//! - their head/dependent markers are not the same present marker,
//! - their uppercase cores are identical,
//! - their lowercase suffixes agree position by position for as long as both
//!   have letters, with `*` agreeing with anything.
//!
//! A shorter suffix therefore matches any longer suffix it prefixes.
//! [`easy_match`] walks the strings; [`easy_match_desc`] answers the same
//! question from the packed descriptor fields in a handful of integer ops.
//! Both are symmetric and total.

use crate::connector::Connector;
use crate::desc::{Condesc, UC_NUM_UNSET};
use crate::encode::LcEnc;

/// Matches two raw connector strings.
pub fn easy_match(s: &str, t: &str) -> bool {
	let (mut s, mut t) = (s.as_bytes(), t.as_bytes());

	let is = take_marker(&mut s);
	let it = take_marker(&mut t);
	if is.is_some() && is == it {
		return false;
	}

	let upper = |c: Option<u8>| c.is_some_and(|c| c.is_ascii_uppercase());
	loop {
		let (cs, ct) = (s.first().copied(), t.first().copied());
		if !upper(cs) && !upper(ct) {
			break;
		}
		if cs != ct {
			return false;
		}
		s = &s[1..];
		t = &t[1..];
	}

	s.iter()
		.zip(t)
		.all(|(&a, &b)| a == b'*' || b == b'*' || a == b)
}

fn take_marker(s: &mut &[u8]) -> Option<u8> {
	match s.split_first() {
		Some((&c, rest)) if c.is_ascii_lowercase() => {
			*s = rest;
			Some(c)
		}
		_ => None,
	}
}

/// Returns true if two packed suffixes agree on every position both constrain.
#[inline(always)]
pub fn lc_compatible(a_letters: LcEnc, a_mask: LcEnc, b_letters: LcEnc, b_mask: LcEnc) -> bool {
	(a_letters ^ b_letters) & a_mask & b_mask == 0
}

/// Compares suffixes and head/dependent markers, assuming equal cores.
#[inline(always)]
pub fn lc_easy_match(c1: &Condesc, c2: &Condesc) -> bool {
	lc_compatible(c1.lc_letters, c1.lc_mask, c2.lc_letters, c2.lc_mask)
		&& !c1.head_dependent.excludes(c2.head_dependent)
}

/// Matches two descriptors of a grouped table.
#[inline(always)]
pub fn easy_match_desc(c1: &Condesc, c2: &Condesc) -> bool {
	debug_assert!(
		c1.uc_num != UC_NUM_UNSET && c2.uc_num != UC_NUM_UNSET,
		"descriptor match before the table was grouped by core"
	);
	c1.uc_num == c2.uc_num && lc_easy_match(c1, c2)
}

/// Matches two connector instances by their descriptors.
#[inline(always)]
pub fn connectors_match(a: &Connector<'_>, b: &Connector<'_>) -> bool {
	easy_match_desc(a.desc(), b.desc())
}
