//! Hash functions for Bloom filter
//!
//! Uses MurmurHash3 (x64, 128-bit) with a distinct seed per hash function.
//! Every position hashes the original key afresh; positions are never derived
//! from a previous hash output.

use std::io::Cursor;

/// Hash a key with MurmurHash3 using the given seed
///
/// Returns the low 64 bits of the 128-bit digest as an unsigned value.
pub fn murmur_hash(key: &[u8], seed: u32) -> u64 {
    let mut cursor = Cursor::new(key);

    // Reading from an in-memory cursor cannot fail.
    let hash = murmur3::murmur3_x64_128(&mut cursor, seed).unwrap_or(0);
    hash as u64
}

/// Map a 64-bit hash onto `[0, range)` by multiply-high reduction
///
/// Avoids the bias of `hash % range`; the result is always in bounds for a
/// non-zero `range`.
#[inline]
pub fn reduce(hash: u64, range: usize) -> usize {
    ((hash as u128 * range as u128) >> 64) as usize
}

/// Bit index for hash function `seed` applied to `key`
pub fn bit_index(seed: usize, key: &str, bit_length: usize) -> usize {
    reduce(murmur_hash(key.as_bytes(), seed as u32), bit_length)
}

/// Iterate the `hash_count` bit indexes of a key, one per seed
pub fn bit_indexes<'a>(
    key: &'a str,
    hash_count: usize,
    bit_length: usize,
) -> impl Iterator<Item = usize> + 'a {
    (0..hash_count).map(move |seed| bit_index(seed, key, bit_length))
}
