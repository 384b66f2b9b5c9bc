//! Book ID Generator
//!
//! Random URL-safe identifiers.

use rand::Rng;

/// URL-safe alphabet (64 symbols)
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Shortest identifier the generator will produce
pub const MIN_ID_LENGTH: usize = 16;

/// Random ID generator
///
/// Generated IDs are not checked against existing records; at 16 symbols
/// the collision probability is negligible.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    length: usize,
}

impl IdGenerator {
    /// Create a generator producing IDs of `length` symbols (at least [`MIN_ID_LENGTH`]).
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(MIN_ID_LENGTH),
        }
    }

    /// Generate a new ID
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(MIN_ID_LENGTH)
    }
}
