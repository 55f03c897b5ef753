//! Seedable random source for shop generation
//!
//! A non-empty seed gives a fully deterministic xorshift32 stream so a whole
//! shop can be reproduced from its seed string; an empty seed falls back to
//! thread-local entropy. The seeded path must match the original generator
//! bit-for-bit: the seed hash is `s = (s << 5) - s + code` over UTF-16 code
//! units with 32-bit wraparound, and the per-draw shifts operate on the
//! *signed* 32-bit state (`>>` is an arithmetic shift).

use rand::rngs::ThreadRng;
use rand::Rng;

/// Random source threaded through one generation session
pub struct ShopRng {
    kind: Kind,
}

enum Kind {
    Entropy(ThreadRng),
    Seeded(i32),
}

impl ShopRng {
    /// Build from a seed string. Empty seeds are non-deterministic.
    pub fn from_seed(seed: &str) -> Self {
        if seed.is_empty() {
            return ShopRng {
                kind: Kind::Entropy(rand::thread_rng()),
            };
        }
        let mut s: i32 = 0;
        for unit in seed.encode_utf16() {
            s = s
                .wrapping_shl(5)
                .wrapping_sub(s)
                .wrapping_add(i32::from(unit));
        }
        ShopRng {
            kind: Kind::Seeded(s),
        }
    }

    /// Non-deterministic source
    pub fn entropy() -> Self {
        ShopRng::from_seed("")
    }

    /// Whether draws are reproducible from the seed
    pub fn is_seeded(&self) -> bool {
        matches!(self.kind, Kind::Seeded(_))
    }

    /// Next value in [0, 1)
    pub fn random(&mut self) -> f64 {
        match &mut self.kind {
            Kind::Entropy(rng) => rng.gen::<f64>(),
            Kind::Seeded(state) => {
                let mut s = *state;
                s ^= s.wrapping_shl(13);
                s ^= s >> 17;
                s ^= s.wrapping_shl(5);
                *state = s;
                f64::from(s as u32) / 4_294_967_296.0
            }
        }
    }

    /// Next value in [min, max)
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.random() * (max - min)
    }

    /// Pick an index into a collection of `len` elements
    pub fn pick_index(&mut self, len: usize) -> usize {
        (self.random() * len as f64) as usize
    }
}
