pub use bitcoin::hashes::{hash_newtype, sha256d, Hash};

use crate::consensus::Encodable;
use crate::io::{Error as IoError, Write};

hash_newtype! {
    /// A block's identity hash: double-SHA256 over the serialized 80-byte
    /// header.
    pub struct BlockHash(sha256d::Hash);
    /// A transaction identity hash: double-SHA256 over the serialized
    /// transaction.
    pub struct Txid(sha256d::Hash);
    /// The root of the merkle tree over a block's transaction ids.
    pub struct TxMerkleNode(sha256d::Hash);
}

impl From<Txid> for TxMerkleNode {
    fn from(txid: Txid) -> Self {
        TxMerkleNode::from_byte_array(txid.to_byte_array())
    }
}

impl Encodable for BlockHash {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        self.0.consensus_encode(writer)
    }
}

impl Encodable for Txid {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        self.0.consensus_encode(writer)
    }
}

impl Encodable for TxMerkleNode {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        self.0.consensus_encode(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashes_display_in_reverse_byte_order() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x01;
        let hash = BlockHash::from_byte_array(bytes);
        assert!(hash.to_string().ends_with("01"));
    }

    #[test]
    fn test_txid_to_merkle_node_preserves_bytes() {
        let txid = Txid::from_byte_array([0xab; 32]);
        let node = TxMerkleNode::from(txid);
        assert_eq!(node.to_byte_array(), txid.to_byte_array());
    }
}
