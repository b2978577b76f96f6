//! Error types for connector construction.
//!
//! Matching has no error path. Everything here is reported while a
//! dictionary is being loaded or while run options are read, and aborts that
//! load.

use thiserror::Error;

use crate::encode::MAX_LC_LETTERS;

/// A connector string that cannot be encoded into a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
	#[error("empty connector string")]
	Empty,

	/// The leading lowercase letter is neither `h` nor `d`.
	#[error("connector {string:?}: invalid head/dependent marker {marker:?}")]
	InvalidMarker { string: String, marker: char },

	#[error("connector {string:?}: missing uppercase part")]
	EmptyCore { string: String },

	#[error("connector {string:?}: uppercase part longer than {max} bytes", max = u8::MAX)]
	CoreTooLong { string: String },

	#[error(
		"connector {string:?}: lowercase part has {len} letters (at most {max})",
		max = MAX_LC_LETTERS
	)]
	SuffixTooLong { string: String, len: usize },

	/// The suffix holds something other than `a-z` or `*`.
	#[error("connector {string:?}: invalid character {ch:?} at byte {pos}")]
	InvalidChar { string: String, ch: char, pos: usize },
}

/// Descriptor table failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	#[error(transparent)]
	Encode(#[from] EncodeError),

	/// Rehash found an occupied slot for a string that should be unique.
	#[error("descriptor table grow: slot {slot} already taken by {existing:?} while moving {moving:?}")]
	GrowCollision {
		slot: usize,
		existing: String,
		moving: String,
	},

	/// `intern` was called after the table was grouped by core.
	#[error("descriptor table is frozen; cannot intern {string:?}")]
	Frozen { string: String },

	/// An operation needing core ids ran before `sort_by_core`.
	#[error("descriptor table has not been grouped by core yet")]
	NotGrouped,

	#[error("descriptor table is full ({count} descriptors)")]
	Capacity { count: usize },
}

/// Malformed length-limit declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
	#[error("length-limit pattern: {0}")]
	Pattern(#[from] EncodeError),

	#[error("{name:?} is not a length-limit define")]
	UnknownDefine { name: String },

	#[error("length limit {limit} out of range 1..={max}", max = crate::MAX_SENTENCE)]
	OutOfRange { limit: u32 },
}

/// Malformed connector tokens from dictionary text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
	#[error("connector token {token:?} has no direction mark")]
	MissingDirection { token: String },

	#[error("connector token {token:?} has an empty name")]
	EmptyName { token: String },
}

/// Errors reading run options.
#[derive(Debug, Error)]
pub enum OptionsError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("short_length {value} out of range 1..={max}", max = crate::UNLIMITED_LEN)]
	ShortLength { value: u32 },
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Encode(#[from] EncodeError),

	#[error(transparent)]
	Table(#[from] TableError),

	#[error(transparent)]
	Limit(#[from] LimitError),

	#[error(transparent)]
	Token(#[from] TokenError),

	#[error(transparent)]
	Options(#[from] OptionsError),
}

/// Result type for connector operations.
pub type Result<T> = std::result::Result<T, Error>;
