use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Alphabet used by [`Fuzzer::random_text`]. Mixes ASCII with multi-byte
/// chars so char/byte confusion in position arithmetic shows up quickly.
pub const EDIT_ALPHABET: &str = "abcdefxyz é😀\n";

/// A seeded source of random edits for exercising OT functions.
///
/// Uses the xoshiro256** PRNG so that a failing run can be replayed from its
/// seed.
///
/// # Examples
///
/// ```
/// use text_ot_util::fuzzer::Fuzzer;
///
/// let mut fuzzer = Fuzzer::from_u64(7);
///
/// let pos = fuzzer.position(10);
/// assert!(pos <= 10);
///
/// let (start, end) = fuzzer.span(10);
/// assert!(start < end && end <= 10);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a fuzzer with an optional seed. Without one, a seed is drawn
    /// from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Create a fuzzer from a short numeric seed, convenient in test loops.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        Self::new(Some(bytes))
    }

    /// Random integer in `[min, max]` (inclusive).
    pub fn random_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }

    /// `true` with the given probability.
    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..elements.len());
        &elements[idx]
    }

    /// A cursor position in a document of `len` chars: `[0, len]`.
    pub fn position(&mut self, len: usize) -> usize {
        self.random_int(0, len)
    }

    /// A non-empty char range `[start, end)` inside a document of `len` chars.
    ///
    /// `len` must be at least 1.
    pub fn span(&mut self, len: usize) -> (usize, usize) {
        let start = self.random_int(0, len - 1);
        let end = self.random_int(start + 1, len);
        (start, end)
    }

    /// A string of `len` chars drawn from `chars`.
    pub fn random_string(&mut self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect()
    }

    /// Between 1 and `max_len` chars of [`EDIT_ALPHABET`].
    pub fn random_text(&mut self, max_len: usize) -> String {
        let len = self.random_int(1, max_len.max(1));
        self.random_string(len, EDIT_ALPHABET)
    }
}
