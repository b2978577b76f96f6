//! Connector descriptor table.
//!
//! # Purpose
//!
//! Interns every distinct connector string of a dictionary into one
//! [`Condesc`] and groups descriptors by uppercase core so that core equality
//! becomes an integer comparison.
//!
//! # Mental Model
//!
//! 1. **Insert phase:** [`ConTable::intern`] probes an open-addressing table
//!    (linear probing, power-of-two size) and creates descriptors on first
//!    sight. The table doubles once occupancy passes 3/8 of its size.
//! 2. **Number phase:** [`ConTable::sort_by_core`] builds the by-core view and
//!    assigns dense core ids. From then on the table only accepts lookups.
//! 3. **Read phase:** the table is immutable and may be shared across parses.
//!
//! # Invariants
//!
//! - Slot count is a power of two.
//!   - Enforced in: [`ConTable::alloc_slots`], [`ConTable::grow`].
//!   - Tested by: [`crate::invariants::test_growth_preserves_membership`]
//!   - Failure symptom: probing masks off live slots and loses descriptors.
//!
//! - At most one descriptor per string.
//!   - Enforced in: [`ConTable::probe`] (identity comparison of canonical strings).
//!   - Tested by: [`crate::invariants::test_interning_idempotence`]
//!   - Failure symptom: equal connectors get different core ids or limits.
//!
//! - Core ids are equal iff uppercase cores are equal.
//!   - Enforced in: [`ConTable::sort_by_core`].
//!   - Tested by: [`crate::invariants::test_core_id_partition`]
//!   - Failure symptom: descriptor matching disagrees with string matching.

use std::ops::Index;

use lgram_string_set::Istr;
use tracing::{debug, error, trace, warn};

use crate::desc::{Condesc, CondescId};
use crate::encode::encode;
use crate::error::TableError;
use crate::hash::connector_str_hash;

/// Factor applied to the slot count on every growth.
pub const TABLE_GROW_FACTOR: usize = 2;

/// Smallest slot count allocated for a table.
pub const MIN_TABLE_SIZE: usize = 16;

/// Interning table of connector descriptors for one dictionary.
#[derive(Debug, Default)]
pub struct ConTable {
	/// Hash slots; empty until the first insertion.
	hdesc: Box<[Option<CondescId>]>,
	/// Descriptors in creation order, indexed by [`CondescId`].
	descs: Vec<Condesc>,
	/// Descriptors sorted by uppercase core; empty until grouped.
	sdesc: Box<[CondescId]>,
	expected: usize,
	num_uc: usize,
	grouped: bool,
}

impl ConTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty table sized for `count` distinct connectors.
	pub fn with_expected_count(count: usize) -> Self {
		Self {
			expected: count,
			..Self::default()
		}
	}

	/// Sets the expected number of distinct connectors.
	///
	/// Only takes effect before the first insertion.
	pub fn set_expected_count(&mut self, count: usize) {
		if !self.hdesc.is_empty() {
			warn!(count, size = self.hdesc.len(), "descriptor table already allocated; size hint ignored");
			return;
		}
		self.expected = count;
	}

	/// Returns the descriptor for `s`, creating it on first use.
	///
	/// `s` must come from the same [`lgram_string_set::StringSet`] as every
	/// other string interned here; slots are compared by identity.
	pub fn intern(&mut self, s: &Istr) -> Result<CondescId, TableError> {
		if self.hdesc.is_empty() {
			if self.grouped {
				return Err(TableError::Frozen { string: s.to_string() });
			}
			self.alloc_slots();
		}

		let hash = connector_str_hash(s);
		let slot = Self::probe(&self.hdesc, &self.descs, s, hash);
		if let Some(id) = self.hdesc[slot] {
			return Ok(id);
		}
		if self.grouped {
			return Err(TableError::Frozen { string: s.to_string() });
		}

		let info = encode(s)?;
		let id = u32::try_from(self.descs.len())
			.ok()
			.filter(|&n| n != u32::MAX)
			.map(CondescId)
			.ok_or(TableError::Capacity { count: self.descs.len() })?;

		trace!(connector = %s, "creating connector descriptor");
		self.descs.push(Condesc::new(s.clone(), hash, info));
		self.hdesc[slot] = Some(id);

		if 8 * self.descs.len() > 3 * self.hdesc.len() {
			self.grow()?;
		}
		Ok(id)
	}

	/// Finds a descriptor by string contents.
	pub fn lookup(&self, s: &str) -> Option<CondescId> {
		if self.hdesc.is_empty() {
			return None;
		}
		let mask = self.hdesc.len() - 1;
		let mut i = connector_str_hash(s) as usize & mask;
		while let Some(id) = self.hdesc[i] {
			if &*self.descs[id.index()].string == s {
				return Some(id);
			}
			i = (i + 1) & mask;
		}
		None
	}

	/// Sorts descriptors by uppercase core and assigns dense core ids.
	///
	/// Ends the insert phase: later [`ConTable::intern`] calls for new
	/// strings fail with [`TableError::Frozen`].
	pub fn sort_by_core(&mut self) {
		let descs = &self.descs;
		let mut sdesc: Vec<CondescId> = (0..descs.len() as u32).map(CondescId).collect();
		sdesc.sort_by(|&a, &b| {
			let (a, b) = (&descs[a.index()], &descs[b.index()]);
			a.uc_part()
				.cmp(b.uc_part())
				.then_with(|| a.string.as_str().cmp(b.string.as_str()))
		});

		let mut uc_num = 0u32;
		let mut prev: Option<CondescId> = None;
		for &id in &sdesc {
			if let Some(p) = prev
				&& self.descs[p.index()].uc_part() != self.descs[id.index()].uc_part()
			{
				uc_num += 1;
			}
			self.descs[id.index()].uc_num = uc_num;
			prev = Some(id);
		}

		self.num_uc = if sdesc.is_empty() { 0 } else { uc_num as usize + 1 };
		self.sdesc = sdesc.into_boxed_slice();
		self.grouped = true;
		debug!(connectors = self.descs.len(), cores = self.num_uc, "grouped connector descriptors by core");
	}

	/// Returns the descriptor for `id`, if it belongs to this table.
	#[inline]
	pub fn get(&self, id: CondescId) -> Option<&Condesc> {
		self.descs.get(id.index())
	}

	pub(crate) fn get_mut(&mut self, id: CondescId) -> &mut Condesc {
		&mut self.descs[id.index()]
	}

	/// Iterates descriptors in creation order.
	pub fn iter(&self) -> impl Iterator<Item = (CondescId, &Condesc)> + '_ {
		self.descs
			.iter()
			.enumerate()
			.map(|(n, d)| (CondescId(n as u32), d))
	}

	pub(crate) fn descs_mut(&mut self) -> impl Iterator<Item = &mut Condesc> + '_ {
		self.descs.iter_mut()
	}

	/// The by-core view, once grouped.
	pub fn sorted(&self) -> Option<&[CondescId]> {
		self.grouped.then_some(&*self.sdesc)
	}

	/// Descriptors whose uppercase core is exactly `uc`, from the by-core view.
	pub(crate) fn uc_range(&self, uc: &str) -> &[CondescId] {
		let lo = self.sdesc.partition_point(|&id| self.descs[id.index()].uc_part() < uc);
		let hi = self.sdesc.partition_point(|&id| self.descs[id.index()].uc_part() <= uc);
		&self.sdesc[lo..hi]
	}

	/// Number of distinct connector strings.
	#[inline]
	pub fn len(&self) -> usize {
		self.descs.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.descs.is_empty()
	}

	/// Number of distinct uppercase cores; 0 before grouping.
	#[inline]
	pub fn num_uc(&self) -> usize {
		self.num_uc
	}

	/// Current number of hash slots.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.hdesc.len()
	}

	#[inline]
	pub fn is_grouped(&self) -> bool {
		self.grouped
	}

	fn alloc_slots(&mut self) {
		let size = self.expected.max(MIN_TABLE_SIZE).next_power_of_two();
		if self.expected > MIN_TABLE_SIZE && size != self.expected {
			warn!(hint = self.expected, size, "descriptor table size hint rounded up to a power of two");
		}
		self.hdesc = vec![None; size].into_boxed_slice();
	}

	/// Returns the slot holding `s`, or the empty slot where it belongs.
	fn probe(slots: &[Option<CondescId>], descs: &[Condesc], s: &Istr, hash: u32) -> usize {
		let mask = slots.len() - 1;
		let mut i = hash as usize & mask;
		while let Some(id) = slots[i] {
			let held = &descs[id.index()].string;
			if Istr::same(held, s) {
				break;
			}
			debug_assert!(held != s, "connector {s:?} interned from a foreign string set");
			i = (i + 1) & mask;
		}
		i
	}

	/// Doubles the slot count and reinserts every descriptor by its stored hash.
	fn grow(&mut self) -> Result<(), TableError> {
		let old_size = self.hdesc.len();
		let new_size = old_size * TABLE_GROW_FACTOR;
		debug!(from = old_size, to = new_size, "growing descriptor table");

		let mut slots = vec![None; new_size].into_boxed_slice();
		for &id in self.hdesc.iter().flatten() {
			let moving = &self.descs[id.index()];
			let slot = Self::probe(&slots, &self.descs, &moving.string, moving.str_hash);
			if let Some(existing) = slots[slot] {
				error!(slot, connector = %moving.string, "descriptor table grow: internal error");
				return Err(TableError::GrowCollision {
					slot,
					existing: self.descs[existing.index()].string.to_string(),
					moving: moving.string.to_string(),
				});
			}
			slots[slot] = Some(id);
		}

		self.hdesc = slots;
		Ok(())
	}
}

impl Index<CondescId> for ConTable {
	type Output = Condesc;

	#[inline]
	fn index(&self, id: CondescId) -> &Condesc {
		&self.descs[id.index()]
	}
}
