//! Hash functions used by the descriptor table and offered to the parse chart.

/// Jenkins one-at-a-time hash over the bytes of `s`.
///
/// Used to place connector strings in the descriptor table and to hash
/// uppercase cores.
#[inline]
pub fn connector_str_hash(s: &str) -> u32 {
	let mut i: u32 = 0;
	for &b in s.as_bytes() {
		i = i.wrapping_add(u32::from(b));
		i = i.wrapping_add(i << 10);
		i ^= i >> 6;
	}
	i = i.wrapping_add(i << 3);
	i ^= i >> 11;
	i.wrapping_add(i << 15)
}

/// djb2 hash over the bytes of `s`.
#[inline]
pub fn string_hash(s: &str) -> u32 {
	s.as_bytes().iter().fold(5381u32, |i, &b| {
		(i << 5).wrapping_add(i).wrapping_add(u32::from(b))
	})
}

/// sdbm-style hash of a link candidate, masked to `table_size`.
///
/// `le` and `re` identify the left and right connector instances (arena
/// slots). `table_size` must be a power of two.
#[inline]
pub fn pair_hash(table_size: usize, lw: u32, rw: u32, le: usize, re: usize, cost: u32) -> usize {
	debug_assert!(table_size.is_power_of_two());
	let step = |i: u32, v: u32| v.wrapping_add(i << 6).wrapping_add(i << 16).wrapping_sub(i);
	let mut i = cost;
	i = step(i, lw);
	i = step(i, rw);
	i = step(i, le as u32);
	i = step(i, re as u32);
	i as usize & (table_size - 1)
}

#[cfg(test)]
mod tests;
