use lgram_string_set::StringSet;

use crate::desc::{Condesc, CondescId};
use crate::table::ConTable;

/// Interns `names` into a fresh table without grouping it.
pub(crate) fn table_of(names: &[&str]) -> (StringSet, ConTable, Vec<CondescId>) {
	let mut strings = StringSet::new();
	let mut table = ConTable::new();
	let ids = names
		.iter()
		.map(|n| table.intern(&strings.add(n)).expect("valid connector"))
		.collect();
	(strings, table, ids)
}

/// Interns `names` into a fresh table and groups it by core.
pub(crate) fn grouped_table(names: &[&str]) -> (StringSet, ConTable) {
	let (strings, mut table, _) = table_of(names);
	table.sort_by_core();
	(strings, table)
}

/// Looks up the descriptor for `name`.
pub(crate) fn desc<'t>(table: &'t ConTable, name: &str) -> &'t Condesc {
	let id = table.lookup(name).unwrap_or_else(|| panic!("{name} not interned"));
	&table[id]
}
