//! Per-run options consulted when connector instances are created.
//!
//! ```toml
//! short_length = 10
//! all_short = true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Run options affecting connector reach limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
	/// Reach limit for connectors whose descriptor says "use the run default".
	pub short_length: u8,
	/// Clip every connector's reach limit to `short_length`.
	pub all_short: bool,
}

/// Returns the default short link length.
fn default_short_length() -> u8 {
	16
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			short_length: default_short_length(),
			all_short: false,
		}
	}
}

impl ParseOptions {
	/// Parses options from TOML, filling omitted fields with defaults.
	pub fn from_toml_str(src: &str) -> Result<Self, OptionsError> {
		#[derive(Deserialize)]
		#[serde(default, deny_unknown_fields)]
		struct Raw {
			short_length: u32,
			all_short: bool,
		}

		impl Default for Raw {
			fn default() -> Self {
				let d = ParseOptions::default();
				Self {
					short_length: u32::from(d.short_length),
					all_short: d.all_short,
				}
			}
		}

		let raw: Raw = toml::from_str(src)?;
		let short_length = u8::try_from(raw.short_length)
			.ok()
			.filter(|&n| n != 0)
			.ok_or(OptionsError::ShortLength { value: raw.short_length })?;

		Ok(Self {
			short_length,
			all_short: raw.all_short,
		})
	}

	/// Returns options with `short_length` replaced.
	pub fn with_short_length(mut self, short_length: u8) -> Self {
		self.short_length = short_length;
		self
	}

	/// Returns options with `all_short` replaced.
	pub fn with_all_short(mut self, all_short: bool) -> Self {
		self.all_short = all_short;
		self
	}
}

#[cfg(test)]
mod tests;
