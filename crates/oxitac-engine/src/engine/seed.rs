use std::str::FromStr;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParseSeedError;

/// Seed for the auto-responder's random number generator.
///
/// A 128-bit seed written as a 32-digit hex string. Two sessions built from the
/// same seed and fed the same moves end up with identical boards, which makes
/// games reproducible for tests and recordings.
///
/// # Example
///
/// ```
/// use oxitac_engine::{GameSession, ResponderSeed};
/// use rand::Rng as _;
///
/// let seed: ResponderSeed = rand::rng().random();
///
/// let mut a = GameSession::with_seed(seed);
/// let mut b = GameSession::with_seed(seed);
/// a.play(4).unwrap();
/// b.play(4).unwrap();
/// assert_eq!(a.board(), b.board());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponderSeed([u8; 16]);

impl ResponderSeed {
    #[must_use]
    pub const fn from_u128(num: u128) -> Self {
        Self(num.to_be_bytes())
    }

    #[must_use]
    pub const fn as_u128(self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Creates the random number generator this seed describes.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

/// Formats the seed as a zero-padded 32-digit lowercase hex string.
impl std::fmt::Display for ResponderSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", self.as_u128())
    }
}

/// Parses 1 to 32 hex digits; shorter strings are zero-extended on the left.
impl FromStr for ResponderSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > 32 {
            return Err(ParseSeedError {
                input: s.to_owned(),
            });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError {
            input: s.to_owned(),
        })?;
        Ok(Self::from_u128(num))
    }
}

impl Serialize for ResponderSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ResponderSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `ResponderSeed` values with `rng.random()`.
impl Distribution<ResponderSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ResponderSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        ResponderSeed(seed)
    }
}
