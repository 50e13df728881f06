//! Merkle root of a block's transactions.
//!
//! Only the single-transaction case is defined. Larger sets fail instead of
//! producing a made-up root.

use crate::error::{EncodingError, Result};
use crate::hash::Hash;

/// Compute the merkle root of a list of transaction hashes.
///
/// One hash is its own root. An empty list has no root, and pairwise
/// combination of two or more hashes is not implemented.
pub fn merkle_root(hashes: &[Hash]) -> Result<Hash> {
    match hashes {
        [] => Err(EncodingError::EmptyTransactionSet),
        [single] => Ok(*single),
        _ => Err(EncodingError::UnsupportedMerkleTree {
            count: hashes.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256;

    #[test]
    fn test_single_hash_is_root() {
        let h = sha256(b"tx");
        assert_eq!(merkle_root(&[h]).unwrap(), h);
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(merkle_root(&[]), Err(EncodingError::EmptyTransactionSet));
    }

    #[test]
    fn test_many_fails_loudly() {
        let hashes = [sha256(b"a"), sha256(b"b"), sha256(b"c")];
        assert_eq!(
            merkle_root(&hashes),
            Err(EncodingError::UnsupportedMerkleTree { count: 3 })
        );
    }
}
