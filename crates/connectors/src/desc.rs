use std::fmt;

use lgram_string_set::Istr;

use crate::encode::{ConnectorInfo, HeadDependent, LcEnc};

/// Core id value before the table is grouped.
pub(crate) const UC_NUM_UNSET: u32 = u32::MAX;

/// Dense handle to a descriptor inside its [`crate::ConTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CondescId(pub(crate) u32);

impl CondescId {
	/// Returns the raw id value.
	pub fn as_u32(self) -> u32 {
		self.0
	}

	#[inline]
	pub(crate) fn index(self) -> usize {
		self.0 as usize
	}
}

/// Connector type descriptor: one per distinct connector string.
///
/// Field order keeps the fields read by the match predicate together.
#[derive(Clone)]
pub struct Condesc {
	pub(crate) lc_letters: LcEnc,
	pub(crate) lc_mask: LcEnc,
	pub(crate) uc_num: u32,
	pub(crate) head_dependent: HeadDependent,
	pub(crate) length_limit: u8,
	pub(crate) uc_start: u8,
	pub(crate) uc_length: u8,
	pub(crate) str_hash: u32,
	pub(crate) uc_hash: u32,
	pub(crate) string: Istr,
}

impl Condesc {
	pub(crate) fn new(string: Istr, str_hash: u32, info: ConnectorInfo) -> Self {
		Self {
			lc_letters: info.lc_letters,
			lc_mask: info.lc_mask,
			uc_num: UC_NUM_UNSET,
			head_dependent: info.head_dependent,
			length_limit: 0,
			uc_start: info.uc_start,
			uc_length: info.uc_length,
			str_hash,
			uc_hash: info.uc_hash,
			string,
		}
	}

	/// Connector name without direction mark.
	#[inline]
	pub fn string(&self) -> &Istr {
		&self.string
	}

	/// The uppercase core.
	#[inline]
	pub fn uc_part(&self) -> &str {
		let start = usize::from(self.uc_start);
		&self.string[start..start + usize::from(self.uc_length)]
	}

	#[inline]
	pub fn uc_start(&self) -> u8 {
		self.uc_start
	}

	#[inline]
	pub fn uc_length(&self) -> u8 {
		self.uc_length
	}

	/// Hash of the uppercase core. Valid in every phase.
	#[inline]
	pub fn uc_hash(&self) -> u32 {
		self.uc_hash
	}

	/// Dense id of the uppercase core, once the table has been grouped.
	#[inline]
	pub fn core_id(&self) -> Option<u32> {
		(self.uc_num != UC_NUM_UNSET).then_some(self.uc_num)
	}

	#[inline]
	pub fn str_hash(&self) -> u32 {
		self.str_hash
	}

	#[inline]
	pub fn head_dependent(&self) -> HeadDependent {
		self.head_dependent
	}

	#[inline]
	pub fn lc_letters(&self) -> LcEnc {
		self.lc_letters
	}

	#[inline]
	pub fn lc_mask(&self) -> LcEnc {
		self.lc_mask
	}

	/// Default reach limit: 0 means "use the run's short length",
	/// [`crate::UNLIMITED_LEN`] means no limit.
	#[inline]
	pub fn length_limit(&self) -> u8 {
		self.length_limit
	}
}

impl fmt::Debug for Condesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Condesc")
			.field("string", &self.string)
			.field("uc_num", &self.core_id())
			.field("head_dependent", &self.head_dependent)
			.field("length_limit", &self.length_limit)
			.field("lc_letters", &format_args!("{:#x}", self.lc_letters))
			.field("lc_mask", &format_args!("{:#x}", self.lc_mask))
			.finish()
	}
}
