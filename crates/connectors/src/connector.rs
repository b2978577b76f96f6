//! Per-parse connector instances.
//!
//! A [`Connector`] is one occurrence of a connector type on one disjunct of
//! one parse. Instances live in a [`ConnectorArena`] owned by that parse and
//! are chained through [`ConnectorId`] links, one chain per disjunct. They
//! borrow their descriptor from a frozen [`crate::ConTable`], so the table
//! outlives every instance and is never mutated through them.

use std::ops::Index;

use slab::Slab;
use tracing::warn;

use crate::UNLIMITED_LEN;
use crate::desc::Condesc;
use crate::options::ParseOptions;

/// Handle to a connector inside its [`ConnectorArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectorId(u32);

impl ConnectorId {
	/// Arena slot index, e.g. for [`crate::hash::pair_hash`].
	#[inline]
	pub fn index(self) -> usize {
		self.0 as usize
	}
}

/// Non-owning handle to a word-occurrence set held by the word graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GwordSetId(pub u32);

/// A connector instance.
#[derive(Debug, Clone)]
pub struct Connector<'t> {
	desc: &'t Condesc,
	length_limit: u8,
	nearest_word: u8,
	multi: bool,
	originating_gword: Option<GwordSetId>,
	next: Option<ConnectorId>,
}

impl<'t> Connector<'t> {
	fn new(desc: &'t Condesc, opts: Option<&ParseOptions>) -> Self {
		Self {
			desc,
			length_limit: connector_length_limit(desc, opts),
			nearest_word: 0,
			multi: false,
			originating_gword: None,
			next: None,
		}
	}

	#[inline]
	pub fn desc(&self) -> &'t Condesc {
		self.desc
	}

	#[inline]
	pub fn string(&self) -> &'t str {
		self.desc.string().as_str()
	}

	#[inline]
	pub fn uc_start(&self) -> u8 {
		self.desc.uc_start()
	}

	#[inline]
	pub fn uc_hash(&self) -> u32 {
		self.desc.uc_hash()
	}

	#[inline]
	pub fn core_id(&self) -> Option<u32> {
		self.desc.core_id()
	}

	/// Effective reach limit of this instance.
	#[inline]
	pub fn length_limit(&self) -> u8 {
		self.length_limit
	}

	/// Recomputes the reach limit from the descriptor and `opts`.
	pub fn set_length_limit(&mut self, opts: Option<&ParseOptions>) {
		self.length_limit = connector_length_limit(self.desc, opts);
	}

	/// Nearest word this connector could ever reach; maintained by the parser.
	#[inline]
	pub fn nearest_word(&self) -> u8 {
		self.nearest_word
	}

	pub fn set_nearest_word(&mut self, word: u8) {
		self.nearest_word = word;
	}

	#[inline]
	pub fn is_multi(&self) -> bool {
		self.multi
	}

	pub fn set_multi(&mut self, multi: bool) {
		self.multi = multi;
	}

	#[inline]
	pub fn originating_gword(&self) -> Option<GwordSetId> {
		self.originating_gword
	}

	pub fn set_originating_gword(&mut self, gword: Option<GwordSetId>) {
		self.originating_gword = gword;
	}

	#[inline]
	pub fn next(&self) -> Option<ConnectorId> {
		self.next
	}
}

/// Effective reach limit of an instance of `desc` under `opts`.
///
/// - No options: unlimited.
/// - Descriptor limit 0: the run's short length.
/// - `all_short`: the descriptor limit clipped to the short length.
/// - Otherwise the descriptor limit.
pub fn connector_length_limit(desc: &Condesc, opts: Option<&ParseOptions>) -> u8 {
	let Some(opts) = opts else {
		return UNLIMITED_LEN;
	};
	let limit = desc.length_limit();
	if limit == 0 || (opts.all_short && limit > opts.short_length) {
		opts.short_length
	} else {
		limit
	}
}

/// Storage for the connector instances of one parse.
#[derive(Debug, Default)]
pub struct ConnectorArena<'t> {
	slab: Slab<Connector<'t>>,
}

impl<'t> ConnectorArena<'t> {
	pub fn new() -> Self {
		Self { slab: Slab::new() }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			slab: Slab::with_capacity(capacity),
		}
	}

	/// Allocates an unlinked instance of `desc`.
	pub fn new_connector(&mut self, desc: &'t Condesc, opts: Option<&ParseOptions>) -> ConnectorId {
		ConnectorId(self.slab.insert(Connector::new(desc, opts)) as u32)
	}

	/// Allocates one instance per descriptor, linked in order; returns the head.
	pub fn new_chain<I>(&mut self, descs: I, opts: Option<&ParseOptions>) -> Option<ConnectorId>
	where
		I: IntoIterator<Item = &'t Condesc>,
		I::IntoIter: DoubleEndedIterator,
	{
		let mut head = None;
		for desc in descs.into_iter().rev() {
			let id = self.new_connector(desc, opts);
			self.slab[id.index()].next = head;
			head = Some(id);
		}
		head
	}

	#[inline]
	pub fn get(&self, id: ConnectorId) -> Option<&Connector<'t>> {
		self.slab.get(id.index())
	}

	#[inline]
	pub fn get_mut(&mut self, id: ConnectorId) -> Option<&mut Connector<'t>> {
		self.slab.get_mut(id.index())
	}

	/// Links `id` to `next`. Returns false if `id` is not live.
	pub fn set_next(&mut self, id: ConnectorId, next: Option<ConnectorId>) -> bool {
		match self.slab.get_mut(id.index()) {
			Some(c) => {
				c.next = next;
				true
			}
			None => false,
		}
	}

	/// Iterates the chain starting at `head`.
	pub fn chain(&self, head: Option<ConnectorId>) -> Chain<'_, 't> {
		Chain { arena: self, cur: head }
	}

	/// Frees every instance of the chain starting at `head`; returns how many.
	///
	/// Descriptors are untouched; they belong to the table.
	pub fn release(&mut self, head: Option<ConnectorId>) -> usize {
		let mut freed = 0;
		let mut cur = head;
		while let Some(id) = cur {
			let Some(c) = self.slab.try_remove(id.index()) else {
				warn!(?id, "connector chain already released");
				break;
			};
			cur = c.next;
			freed += 1;
		}
		freed
	}

	/// Frees every instance of this parse.
	pub fn clear(&mut self) {
		self.slab.clear();
	}

	/// Number of live instances.
	#[inline]
	pub fn len(&self) -> usize {
		self.slab.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.slab.is_empty()
	}
}

impl<'t> Index<ConnectorId> for ConnectorArena<'t> {
	type Output = Connector<'t>;

	#[inline]
	fn index(&self, id: ConnectorId) -> &Connector<'t> {
		&self.slab[id.index()]
	}
}

/// Iterator over a connector chain.
pub struct Chain<'a, 't> {
	arena: &'a ConnectorArena<'t>,
	cur: Option<ConnectorId>,
}

impl<'a, 't> Iterator for Chain<'a, 't> {
	type Item = (ConnectorId, &'a Connector<'t>);

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.cur?;
		let c = self.arena.get(id)?;
		self.cur = c.next;
		Some((id, c))
	}
}
