//! Fixed pools of canned replies.

use rand::Rng;

/// The replies gork chooses from.
pub const GORK_RESPONSES: ResponsePool = ResponsePool(&[
    "Yeah, that's true.",
    "Nah, that's not true.",
]);

/// A fixed, non-empty, ordered set of candidate replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsePool(&'static [&'static str]);

impl ResponsePool {
    /// Returns `None` for an empty slice; a pool always has something to say.
    pub const fn new(entries: &'static [&'static str]) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self(entries))
        }
    }

    pub fn entries(&self) -> &'static [&'static str] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.0.iter().any(|entry| *entry == candidate)
    }

    /// Pick one entry uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.0[rng.gen_range(0..self.0.len())]
    }
}

impl Default for ResponsePool {
    fn default() -> Self {
        GORK_RESPONSES
    }
}
