//! # Receipt Digests
//!
//! SHA-256 digests of signed receipt bodies. An abbreviated receipt carries
//! the digest of its full form so a promoted receipt can be checked against it.

use sha2::{Digest, Sha256};

/// 256-bit digest.
pub type Digest32 = [u8; 32];

/// Digest a serialized receipt body.
pub fn receipt_digest(body: &[u8]) -> Digest32 {
    let mut hasher = Sha256::new();
    hasher.update(body);
    hasher.finalize().into()
}
