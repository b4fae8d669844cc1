use core::{fmt, str::FromStr};

use klane_primitives::DIGEST_BYTES;

use crate::{error::KeccakError, sponge::keccak256};

/// A Keccak-256 digest.
///
/// Displays as `0x`-prefixed lowercase hex, the way Ethereum tooling prints hashes, and parses
/// from hex with or without the prefix.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keccak256Digest(pub [u8; DIGEST_BYTES]);

impl Keccak256Digest {
    /// Hashes `input`.
    pub fn of(input: &[u8]) -> Self {
        Self(keccak256(input))
    }

    pub const fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; DIGEST_BYTES] {
        self.0
    }
}

impl From<[u8; DIGEST_BYTES]> for Keccak256Digest {
    fn from(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Keccak256Digest> for [u8; DIGEST_BYTES] {
    fn from(digest: Keccak256Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Keccak256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Keccak256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Display for Keccak256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#x}")
    }
}

impl fmt::Debug for Keccak256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keccak256Digest({self:#x})")
    }
}

impl FromStr for Keccak256Digest {
    type Err = KeccakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        let bytes: [u8; DIGEST_BYTES] =
            bytes.try_into().map_err(|bytes: Vec<u8>| KeccakError::DigestLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Keccak256Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Keccak256Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
