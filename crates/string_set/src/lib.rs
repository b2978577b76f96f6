//! Canonical string storage.
//!
//! A [`StringSet`] hands out one [`Istr`] per distinct string. Every handle for
//! the same text shares one allocation, so two handles obtained from the same
//! set are equal iff [`Istr::same`] holds. Consumers that only ever compare
//! canonical handles can skip character comparison entirely.
//!
//! Handles are reference counted and stay valid after the set is dropped.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use rustc_hash::FxHashSet;

/// Canonical handle to a string stored in a [`StringSet`].
///
/// `Eq` and `Hash` follow the string contents so the handle can key the set
/// itself. Use [`Istr::same`] for the identity test.
#[derive(Clone)]
pub struct Istr(Arc<str>);

impl Istr {
	/// Returns true if both handles point at the same canonical allocation.
	#[inline]
	pub fn same(a: &Istr, b: &Istr) -> bool {
		Arc::ptr_eq(&a.0, &b.0)
	}

	/// Returns the string contents.
	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Deref for Istr {
	type Target = str;

	#[inline]
	fn deref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for Istr {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl PartialEq for Istr {
	fn eq(&self, other: &Self) -> bool {
		Istr::same(self, other) || *self.0 == *other.0
	}
}

impl Eq for Istr {}

impl Hash for Istr {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

impl fmt::Debug for Istr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&*self.0, f)
	}
}

impl fmt::Display for Istr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Set of canonical strings.
#[derive(Debug, Default)]
pub struct StringSet {
	strings: FxHashSet<Istr>,
}

impl StringSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the canonical handle for `s`, storing it on first use.
	pub fn add(&mut self, s: &str) -> Istr {
		if let Some(existing) = self.strings.get(s) {
			return existing.clone();
		}
		let istr = Istr(Arc::from(s));
		self.strings.insert(istr.clone());
		istr
	}

	/// Returns the canonical handle for `s` if it has been added.
	pub fn get(&self, s: &str) -> Option<Istr> {
		self.strings.get(s).cloned()
	}

	/// Returns the number of distinct strings.
	pub fn len(&self) -> usize {
		self.strings.len()
	}

	/// Returns true if nothing has been added.
	pub fn is_empty(&self) -> bool {
		self.strings.is_empty()
	}
}
