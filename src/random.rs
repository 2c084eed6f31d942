//! Deterministic pseudo-random sequence keyed by a string seed.
//!
//! The stream is an sfc32 generator seeded from four rounds of the xfnv1a
//! string hash, so the same seed always reproduces the same maze. The hash
//! runs over UTF-16 code units of the seed string.

/// xfnv1a string hash; each call to [`Xfnv1a::next_u32`] mixes the state and
/// yields another 32-bit seed word.
struct Xfnv1a {
    state: u32,
}

impl Xfnv1a {
    fn new(seed: &str) -> Self {
        let mut state: u32 = 2166136261;
        for unit in seed.encode_utf16() {
            state = (state ^ u32::from(unit)).wrapping_mul(16777619);
        }
        Self { state }
    }

    fn next_u32(&mut self) -> u32 {
        let mut h = self.state;
        h = h.wrapping_add(h << 13);
        h ^= h >> 7;
        h = h.wrapping_add(h << 3);
        h ^= h >> 17;
        h = h.wrapping_add(h << 5);
        self.state = h;
        h
    }
}

/// Seeded sfc32 stream of floats in `[0, 1)`.
pub struct SeededRng {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl SeededRng {
    pub fn new(seed: &str) -> Self {
        let mut hash = Xfnv1a::new(seed);
        let a = hash.next_u32();
        let b = hash.next_u32();
        let c = hash.next_u32();
        let d = hash.next_u32();
        Self { a, b, c, d }
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let mut t = self.a.wrapping_add(self.b);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21);
        self.d = self.d.wrapping_add(1);
        t = t.wrapping_add(self.d);
        self.c = self.c.wrapping_add(t);
        f64::from(t) / 4294967296.0
    }

    /// `floor(min + next() * (max - min))`.
    pub fn random_int(&mut self, min: u32, max: u32) -> u32 {
        (f64::from(min) + self.next_f64() * f64::from(max - min)).floor() as u32
    }

    /// Forward Fisher-Yates shuffle of a copy of `items`; the input is left
    /// unmodified. Consumes exactly `items.len()` draws, including the final
    /// fixed-point draw.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut result = items.to_vec();
        if result.is_empty() {
            return result;
        }
        let last = result.len() - 1;
        for index in 0..result.len() {
            let offset = (self.next_f64() * (last - index + 1) as f64).floor() as usize;
            result.swap(index, index + offset);
        }
        result
    }
}
