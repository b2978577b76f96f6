#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Link-grammar connectors.
//!
//! # Purpose
//!
//! Represents the typed attachment points ("connectors") of dictionary words,
//! interns their distinct names into shared descriptors, and answers the
//! question the parser asks more than any other: can these two connectors
//! form a link?
//!
//! # Mental Model
//!
//! 1. **Load:** a [`ConnectorDictBuilder`] interns every connector name of a
//!    dictionary into a [`ConTable`] and queues its length-limit defines.
//! 2. **Freeze:** [`ConnectorDictBuilder::finish`] numbers uppercase cores and
//!    stamps length limits. The resulting [`ConnectorDict`] is read-only.
//! 3. **Parse:** each parse allocates [`Connector`]s in its own
//!    [`ConnectorArena`], borrowing descriptors from the frozen table, and
//!    tests pairs with [`easy_match_desc`] / [`connectors_match`].
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Condesc`] | Shared descriptor of one connector name. |
//! | [`ConTable`] | Open-addressing interning table of descriptors. |
//! | [`LengthLimitRegistry`] | Ordered queue of reach-limit rules. |
//! | [`Connector`] | Per-parse instance with its own reach limit. |
//! | [`ParseOptions`] | Run options feeding instance reach limits. |
//!
//! # Concurrency
//!
//! - Building is single-threaded.
//! - A frozen [`ConnectorDict`] is `Send + Sync` and needs no locking.
//! - Arenas belong to one parse each; the match predicates are pure.

/// Dictionary-level owner of connector data.
pub mod dict;
/// Connector descriptors.
pub mod desc;
/// Connector string encoding.
pub mod encode;
/// Error types.
pub mod error;
/// Hash functions.
pub mod hash;
/// Connector instances and their arena.
pub mod connector;
/// Length-limit rules.
pub mod length_limit;
/// The match predicate.
pub mod matching;
/// Run options.
pub mod options;
/// Descriptor table.
pub mod table;
/// Dictionary connector tokens.
pub mod token;

#[cfg(any(test, doc))]
pub(crate) mod invariants;

#[cfg(test)]
pub(crate) mod test_fixtures;

/// Maximum number of words in a sentence.
pub const MAX_SENTENCE: u8 = 254;

/// Reach limit meaning "no limit".
pub const UNLIMITED_LEN: u8 = 255;

pub use connector::{Chain, Connector, ConnectorArena, ConnectorId, GwordSetId, connector_length_limit};
pub use desc::{Condesc, CondescId};
pub use dict::{ConnectorDict, ConnectorDictBuilder, DictConnector};
pub use encode::{ConnectorInfo, HeadDependent, LC_BITS, LC_MASK, LcEnc, MAX_LC_LETTERS, encode};
pub use error::{EncodeError, Error, LimitError, OptionsError, Result, TableError, TokenError};
pub use length_limit::{LengthLimitRegistry, LengthLimitRule};
pub use lgram_string_set::{Istr, StringSet};
pub use matching::{connectors_match, easy_match, easy_match_desc, lc_easy_match};
pub use options::ParseOptions;
pub use table::ConTable;
pub use token::{ConnectorToken, Direction};
