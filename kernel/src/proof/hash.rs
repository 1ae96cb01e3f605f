//! Canonical hashing types and domain separation constants.
//!
//! **Exactly one place defines canonical hashing.** Every digest in the
//! workspace (inventory fingerprints, catalog and recipe-set digests, plan
//! digests) routes through [`canonical_hash`].
//!
//! Algorithm: SHA-256 over `domain || data`, where each domain prefix is a
//! null-terminated byte string.

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`)
///
/// Invariant: the inner string always contains exactly one `:` separator,
/// with non-empty substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    /// Full string in `"algorithm:hex_digest"` format.
    full: String,
    /// Byte offset of the `:` separator (cached from parse).
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the format is invalid (missing colon,
    /// empty algorithm, or empty digest).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation (`"algorithm:hex_digest"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain prefix for inventory fingerprints (quantity slots, little-endian).
pub const DOMAIN_INVENTORY: &[u8] = b"CRAFTER::INVENTORY::V1\0";

/// Domain prefix for item catalog digests.
pub const DOMAIN_CATALOG: &[u8] = b"CRAFTER::CATALOG::V1\0";

/// Domain prefix for compiled recipe-set digests.
pub const DOMAIN_RECIPE_SET: &[u8] = b"CRAFTER::RECIPE_SET::V1\0";

/// Domain prefix for plan digests.
pub const DOMAIN_PLAN: &[u8] = b"CRAFTER::PLAN::V1\0";

/// Domain prefix for run report digests.
pub const DOMAIN_RUN_REPORT: &[u8] = b"CRAFTER::RUN_REPORT::V1\0";

/// Every domain prefix in use. New domains must be added here.
pub const ALL_DOMAINS: [&[u8]; 5] = [
    DOMAIN_INVENTORY,
    DOMAIN_CATALOG,
    DOMAIN_RECIPE_SET,
    DOMAIN_PLAN,
    DOMAIN_RUN_REPORT,
];

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{digest}"),
    }
}
