//! Seeds for reproducible shuffles.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// A 32-byte seed driving a deterministic shuffle.
///
/// Seeds are rendered as 64 hexadecimal characters and parsed back with
/// [`FromStr`], so an interesting arrangement can be written down and
/// replayed later.
///
/// # Examples
///
/// ```
/// use taquin_shuffler::ShuffleSeed;
///
/// let seed = ShuffleSeed::from_phrase("opening position");
/// let hex = seed.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex.parse::<ShuffleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed {
    bytes: [u8; Self::LEN],
}

impl ShuffleSeed {
    /// Number of bytes in a seed.
    pub const LEN: usize = 32;

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self { bytes }
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self::from_bytes(rand::random())
    }

    /// Derives a seed from a phrase via SHA-256.
    ///
    /// The same phrase always yields the same seed, which makes memorable
    /// reproducible shuffles possible without writing down hex strings.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self::from_bytes(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; Self::LEN] {
        self.bytes
    }
}

impl Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ShuffleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != Self::LEN * 2 {
            return Err(ParseSeedError::InvalidLength { length });
        }
        let mut bytes = [0_u8; Self::LEN];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let (Some(high), Some(low)) = (chars.next(), chars.next()) else {
                return Err(ParseSeedError::InvalidLength { length });
            };
            *byte = hex_digit(high)? << 4 | hex_digit(low)?;
        }
        Ok(Self { bytes })
    }
}

fn hex_digit(character: char) -> Result<u8, ParseSeedError> {
    let digit = character
        .to_digit(16)
        .ok_or(ParseSeedError::InvalidDigit { character })?;
    #[expect(clippy::cast_possible_truncation)]
    let digit = digit as u8;
    Ok(digit)
}

/// Error returned when a seed string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hexadecimal characters, got {length}")]
    InvalidLength {
        /// Number of characters found.
        length: usize,
    },
    /// The string contains a character outside `0-9a-fA-F`.
    #[display("seed contains a non-hexadecimal character: {character:?}")]
    InvalidDigit {
        /// The offending character.
        character: char,
    },
}
