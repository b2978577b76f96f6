//! Length-limit registry.
//!
//! Dictionaries declare reach limits with defines such as
//! `LENGTH-LIMIT-1: YS+ & ...;` or `UNLIMITED-CONNECTORS: S+ & O+ & ...;`.
//! The loader turns each into a [`LengthLimitRule`] in declaration order and
//! queues it in a [`LengthLimitRegistry`]. Once the table is grouped, the
//! registry is consumed and stamps its limits onto matching descriptors;
//! later rules overwrite earlier ones.
//!
//! A pattern matches a descriptor when the uppercase cores are identical, the
//! suffixes are compatible, and the pattern's head/dependent marker is absent
//! or identical to the descriptor's.

use tracing::debug;

use crate::desc::Condesc;
use crate::encode::{ConnectorInfo, HeadDependent, encode};
use crate::error::{LimitError, TableError};
use crate::matching::lc_compatible;
use crate::table::ConTable;
use crate::{MAX_SENTENCE, UNLIMITED_LEN};

/// Define name that marks connectors as unlimited.
pub const UNLIMITED_CONNECTORS_WORD: &str = "UNLIMITED-CONNECTORS";
/// Prefix of define names carrying a numeric limit.
pub const LIMITED_CONNECTORS_WORD: &str = "LENGTH-LIMIT-";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pattern {
	string: String,
	info: ConnectorInfo,
}

impl Pattern {
	fn matches(&self, desc: &Condesc) -> bool {
		lc_compatible(self.info.lc_letters, self.info.lc_mask, desc.lc_letters(), desc.lc_mask())
			&& (self.info.head_dependent == HeadDependent::None
				|| self.info.head_dependent == desc.head_dependent())
	}
}

/// A set of connector patterns and the reach limit they receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthLimitRule {
	name: Option<String>,
	patterns: Vec<Pattern>,
	limit: u8,
}

impl LengthLimitRule {
	/// Creates a rule giving `limit` to every connector matching one of `patterns`.
	///
	/// `limit` must be in `1..=MAX_SENTENCE` or be [`UNLIMITED_LEN`].
	pub fn new<I, S>(patterns: I, limit: u8) -> Result<Self, LimitError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		if limit == 0 {
			return Err(LimitError::OutOfRange { limit: 0 });
		}
		let patterns = patterns
			.into_iter()
			.map(|p| {
				let string = p.into();
				let info = encode(&string)?;
				Ok(Pattern { string, info })
			})
			.collect::<Result<Vec<_>, LimitError>>()?;
		Ok(Self {
			name: None,
			patterns,
			limit,
		})
	}

	/// Creates a rule from a dictionary define.
	///
	/// `UNLIMITED-CONNECTORS` yields [`UNLIMITED_LEN`]; `LENGTH-LIMIT-<n>`
	/// yields `n`.
	pub fn from_define<I, S>(name: &str, patterns: I) -> Result<Self, LimitError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let limit = if name == UNLIMITED_CONNECTORS_WORD {
			UNLIMITED_LEN
		} else if let Some(n) = name.strip_prefix(LIMITED_CONNECTORS_WORD) {
			let n: u32 = n.parse().map_err(|_| LimitError::UnknownDefine { name: name.to_owned() })?;
			u8::try_from(n)
				.ok()
				.filter(|&n| (1..=MAX_SENTENCE).contains(&n))
				.ok_or(LimitError::OutOfRange { limit: n })?
		} else {
			return Err(LimitError::UnknownDefine { name: name.to_owned() });
		};

		let mut rule = Self::new(patterns, limit)?;
		rule.name = Some(name.to_owned());
		Ok(rule)
	}

	/// Define name this rule came from, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn limit(&self) -> u8 {
		self.limit
	}

	pub fn patterns(&self) -> impl Iterator<Item = &str> + '_ {
		self.patterns.iter().map(|p| p.string.as_str())
	}
}

/// Ordered queue of length-limit rules for one dictionary.
#[derive(Debug, Default, Clone)]
pub struct LengthLimitRegistry {
	rules: Vec<LengthLimitRule>,
}

impl LengthLimitRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a rule after all previously declared ones.
	pub fn push(&mut self, rule: LengthLimitRule) {
		self.rules.push(rule);
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &LengthLimitRule> + '_ {
		self.rules.iter()
	}

	/// Stamps every rule onto `table`, in declaration order.
	///
	/// If no rule declared [`UNLIMITED_LEN`], descriptors left at 0 become
	/// unlimited. Requires a grouped table.
	pub fn apply(self, table: &mut ConTable) -> Result<(), TableError> {
		if !table.is_grouped() {
			return Err(TableError::NotGrouped);
		}

		let num_rules = self.rules.len();
		let mut stamped = 0usize;
		let mut unlimited_found = false;
		for rule in self.rules {
			unlimited_found |= rule.limit == UNLIMITED_LEN;
			for pattern in &rule.patterns {
				let ids = table.uc_range(pattern.info.uc_part(&pattern.string)).to_vec();
				for id in ids {
					let desc = table.get_mut(id);
					if pattern.matches(desc) {
						desc.length_limit = rule.limit;
						stamped += 1;
					}
				}
			}
		}

		if !unlimited_found {
			for desc in table.descs_mut().filter(|d| d.length_limit == 0) {
				desc.length_limit = UNLIMITED_LEN;
			}
		}

		debug!(rules = num_rules, stamped, unlimited_found, "applied connector length limits");
		Ok(())
	}
}

#[cfg(test)]
mod tests;
