//! Dictionary-level ownership of connector data.
//!
//! [`ConnectorDictBuilder`] collects connectors and length-limit rules while a
//! dictionary loads. [`ConnectorDictBuilder::finish`] groups the table and
//! applies the limits, producing a [`ConnectorDict`] that never changes again
//! and can be shared by any number of concurrent parses.

use lgram_string_set::StringSet;
use tracing::debug;

use crate::connector::ConnectorArena;
use crate::desc::{Condesc, CondescId};
use crate::error::Result;
use crate::length_limit::{LengthLimitRegistry, LengthLimitRule};
use crate::table::ConTable;
use crate::token::{ConnectorToken, Direction};

/// A connector token resolved against the descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictConnector {
	pub desc: CondescId,
	pub direction: Direction,
	pub multi: bool,
}

/// Mutable connector state of a dictionary being loaded.
#[derive(Debug, Default)]
pub struct ConnectorDictBuilder {
	strings: StringSet,
	table: ConTable,
	length_limits: LengthLimitRegistry,
}

impl ConnectorDictBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a builder sized for `count` distinct connector names.
	pub fn with_expected_count(count: usize) -> Self {
		Self {
			table: ConTable::with_expected_count(count),
			..Self::default()
		}
	}

	/// Interns a connector name (no direction mark).
	pub fn add(&mut self, name: &str) -> Result<CondescId> {
		let name = self.strings.add(name);
		Ok(self.table.intern(&name)?)
	}

	/// Parses and interns a dictionary token such as `@MX+`.
	pub fn add_token(&mut self, token: &str) -> Result<DictConnector> {
		let tok = ConnectorToken::parse(token)?;
		Ok(DictConnector {
			desc: self.add(tok.name)?,
			direction: tok.direction,
			multi: tok.multi,
		})
	}

	/// Queues a length-limit define such as `LENGTH-LIMIT-2`.
	pub fn define_length_limit<I, S>(&mut self, name: &str, patterns: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.length_limits.push(LengthLimitRule::from_define(name, patterns)?);
		Ok(())
	}

	/// Queues an already built rule.
	pub fn push_length_limit(&mut self, rule: LengthLimitRule) {
		self.length_limits.push(rule);
	}

	/// The table as built so far.
	pub fn table(&self) -> &ConTable {
		&self.table
	}

	/// Groups descriptors by core, applies length limits, and freezes.
	pub fn finish(self) -> Result<ConnectorDict> {
		let Self {
			strings,
			mut table,
			length_limits,
		} = self;
		table.sort_by_core();
		length_limits.apply(&mut table)?;
		debug!(
			connectors = table.len(),
			cores = table.num_uc(),
			strings = strings.len(),
			"connector dictionary ready"
		);
		Ok(ConnectorDict { table })
	}
}

/// Frozen connector data of a loaded dictionary.
#[derive(Debug)]
pub struct ConnectorDict {
	table: ConTable,
}

impl ConnectorDict {
	pub fn table(&self) -> &ConTable {
		&self.table
	}

	/// Descriptor for a connector name, if the dictionary uses it.
	pub fn desc(&self, name: &str) -> Option<&Condesc> {
		self.table.lookup(name).map(|id| &self.table[id])
	}

	/// Starts an instance arena for one parse against this dictionary.
	pub fn arena(&self) -> ConnectorArena<'_> {
		ConnectorArena::new()
	}
}
