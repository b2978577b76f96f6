//! Structural encoding of connector strings.
//!
//! A connector string is `[h|d]CORE[suffix]`: an optional head/dependent
//! marker, a non-empty run of uppercase letters, then up to
//! [`MAX_LC_LETTERS`] lowercase letters or `*` wildcards.
//!
//! The suffix is packed into two `u64`s with one [`LC_BITS`]-wide slot per
//! position. `lc_letters` holds the letter code, `lc_mask` has the slot's bits
//! set only where the position carries a concrete letter. Wildcards and
//! positions past the end of the suffix are clear in the mask, which is what
//! makes a shorter suffix compatible with any longer one it prefixes.

use crate::error::EncodeError;
use crate::hash::connector_str_hash;

/// Width of one packed suffix letter.
pub const LC_BITS: u32 = 7;
/// Mask of one packed suffix slot.
pub const LC_MASK: LcEnc = (1 << LC_BITS) - 1;
/// Number of suffix letters that fit in an [`LcEnc`].
pub const MAX_LC_LETTERS: usize = (LcEnc::BITS / LC_BITS) as usize;

/// Packed suffix word.
pub type LcEnc = u64;

/// Role marker carried by a leading lowercase letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeadDependent {
	#[default]
	None,
	/// `h`: the head word of a link.
	Head,
	/// `d`: the dependent word of a link.
	Dependent,
}

impl HeadDependent {
	/// Maps a marker byte to its role.
	#[inline]
	pub fn from_marker(b: u8) -> Option<Self> {
		match b {
			b'h' => Some(Self::Head),
			b'd' => Some(Self::Dependent),
			_ => None,
		}
	}

	/// Returns the marker letter, if any.
	pub fn marker(self) -> Option<char> {
		match self {
			Self::None => None,
			Self::Head => Some('h'),
			Self::Dependent => Some('d'),
		}
	}

	/// Returns true if two connectors with these roles may never link.
	///
	/// Only a pair of identical, present markers is excluded.
	#[inline]
	pub fn excludes(self, other: Self) -> bool {
		self != Self::None && self == other
	}
}

/// Encoded fields of one connector string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorInfo {
	pub head_dependent: HeadDependent,
	/// Byte offset of the uppercase core.
	pub uc_start: u8,
	/// Byte length of the uppercase core.
	pub uc_length: u8,
	/// Jenkins hash of the uppercase core.
	pub uc_hash: u32,
	pub lc_letters: LcEnc,
	pub lc_mask: LcEnc,
}

impl ConnectorInfo {
	/// Returns the uppercase core of `s`, the string this info was encoded from.
	#[inline]
	pub fn uc_part<'s>(&self, s: &'s str) -> &'s str {
		let start = usize::from(self.uc_start);
		&s[start..start + usize::from(self.uc_length)]
	}

	/// Returns the part of `s` following the uppercase core.
	#[inline]
	pub fn lc_part<'s>(&self, s: &'s str) -> &'s str {
		&s[usize::from(self.uc_start) + usize::from(self.uc_length)..]
	}
}

/// Encodes a connector string (without direction mark).
pub fn encode(s: &str) -> Result<ConnectorInfo, EncodeError> {
	let bytes = s.as_bytes();
	let Some(&first) = bytes.first() else {
		return Err(EncodeError::Empty);
	};

	let mut pos = 0;
	let mut head_dependent = HeadDependent::None;
	if first.is_ascii_lowercase() {
		head_dependent = HeadDependent::from_marker(first).ok_or_else(|| EncodeError::InvalidMarker {
			string: s.to_owned(),
			marker: char::from(first),
		})?;
		pos = 1;
	}

	let uc_start = pos;
	while pos < bytes.len() && bytes[pos].is_ascii_uppercase() {
		pos += 1;
	}
	let uc_length = pos - uc_start;
	if uc_length == 0 {
		return Err(EncodeError::EmptyCore { string: s.to_owned() });
	}
	let uc_length = u8::try_from(uc_length).map_err(|_| EncodeError::CoreTooLong { string: s.to_owned() })?;

	let suffix = &bytes[pos..];
	if let Some(bad) = suffix.iter().position(|&b| b != b'*' && !b.is_ascii_lowercase()) {
		let at = pos + bad;
		return Err(EncodeError::InvalidChar {
			string: s.to_owned(),
			ch: s[at..].chars().next().unwrap_or('\u{fffd}'),
			pos: at,
		});
	}
	if suffix.len() > MAX_LC_LETTERS {
		return Err(EncodeError::SuffixTooLong {
			string: s.to_owned(),
			len: suffix.len(),
		});
	}

	let mut lc_letters: LcEnc = 0;
	let mut lc_mask: LcEnc = 0;
	for (slot, &b) in suffix.iter().enumerate() {
		if b == b'*' {
			continue;
		}
		let shift = slot as u32 * LC_BITS;
		lc_letters |= (LcEnc::from(b) & LC_MASK) << shift;
		lc_mask |= LC_MASK << shift;
	}

	Ok(ConnectorInfo {
		head_dependent,
		uc_start: uc_start as u8,
		uc_length,
		uc_hash: connector_str_hash(&s[uc_start..pos]),
		lc_letters,
		lc_mask,
	})
}

#[cfg(test)]
mod tests;
