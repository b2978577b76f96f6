//! Connector tokens as written in dictionary expressions.
//!
//! A token is `[@]NAME(+|-)`: an optional multi-connector mark, the connector
//! name, and the direction it points in.

use crate::error::TokenError;

/// Side of the word a connector links towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// `-`: links to a word on the left.
	Left,
	/// `+`: links to a word on the right.
	Right,
}

impl Direction {
	pub fn mark(self) -> char {
		match self {
			Direction::Left => '-',
			Direction::Right => '+',
		}
	}
}

/// A parsed connector token borrowing its name from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorToken<'a> {
	pub name: &'a str,
	pub direction: Direction,
	pub multi: bool,
}

impl<'a> ConnectorToken<'a> {
	/// Splits a token into its parts. The name itself is validated when it
	/// is interned.
	pub fn parse(token: &'a str) -> Result<Self, TokenError> {
		let (multi, rest) = match token.strip_prefix('@') {
			Some(rest) => (true, rest),
			None => (false, token),
		};
		let (name, direction) = if let Some(name) = rest.strip_suffix('+') {
			(name, Direction::Right)
		} else if let Some(name) = rest.strip_suffix('-') {
			(name, Direction::Left)
		} else {
			return Err(TokenError::MissingDirection { token: token.to_owned() });
		};
		if name.is_empty() {
			return Err(TokenError::EmptyName { token: token.to_owned() });
		}
		Ok(Self { name, direction, multi })
	}
}
