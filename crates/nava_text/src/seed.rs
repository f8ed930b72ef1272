//! Deterministic seeding for the text generators.
//!
//! The same identity string must always produce the same output, across
//! processes and platforms, so the hash and the generator are both
//! pinned here rather than borrowed from a hasher whose algorithm may
//! change between releases.
//!
//! FNV-1a: Fowler/Noll/Vo, public domain. SplitMix64: Steele, Lea &
//! Flood 2014, public domain reference constants.

/// FNV-1a 64-bit hash of a byte string.
pub fn fnv1a_64(input: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = OFFSET_BASIS;
    for byte in input.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// SplitMix64 sequence generator.
#[derive(Debug, Clone)]
pub struct Picker {
    state: u64,
}

impl Picker {
    /// Seed from an identity string such as `"Scorpio-2024-01-15"`.
    pub fn from_identity(identity: &str) -> Self {
        Self {
            state: fnv1a_64(identity),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform draw in `0..bound`. `bound` must be nonzero.
    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    /// Pick one element of a nonempty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }

    /// Uniform draw from an inclusive integer range.
    pub fn in_range(&mut self, lo: u32, hi: u32) -> u32 {
        lo + self.below((hi - lo + 1) as usize) as u32
    }
}
