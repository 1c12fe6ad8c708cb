//! Day-seeded deterministic permutation.
//!
//! SplitMix64 driving a Fisher-Yates shuffle from the last index down,
//! with `j = next_u64() % (i + 1)`. The sequence is fully specified so a
//! plan can be reproduced bit-for-bit in any language.

#[derive(Clone, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

/// Permute `items` with a generator seeded by `seed`
pub fn seeded_permutation<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut out = items.to_vec();
    let mut rng = SplitMix64::new(seed);
    for i in (1..out.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        out.swap(i, j);
    }
    out
}

/// First `n` items of the day's permutation of `pool`
pub fn select<T: Clone>(pool: &[T], n: usize, day_number: u32) -> Vec<T> {
    let mut picked = seeded_permutation(pool, u64::from(day_number));
    picked.truncate(n);
    picked
}
