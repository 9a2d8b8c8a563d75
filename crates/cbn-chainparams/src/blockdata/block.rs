use crate::blockdata::transaction::Transaction;
use crate::consensus::{Encodable, VarInt};
use crate::hashes::{sha256d, BlockHash, Hash, TxMerkleNode};
use crate::io::{Error as IoError, Write};

/// A block header.
///
/// The identity hash is double-SHA256 over the 80 serialized bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: BlockHash,
    pub merkle_root: TxMerkleNode,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn block_hash(&self) -> BlockHash {
        let mut bytes = Vec::with_capacity(80);
        self.consensus_encode(&mut bytes)
            .expect("in-memory writers don't error");
        BlockHash::from_byte_array(sha256d::Hash::hash(&bytes).to_byte_array())
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        let mut len = self.version.consensus_encode(writer)?;
        len += self.prev_block_hash.consensus_encode(writer)?;
        len += self.merkle_root.consensus_encode(writer)?;
        len += self.time.consensus_encode(writer)?;
        len += self.bits.consensus_encode(writer)?;
        len += self.nonce.consensus_encode(writer)?;
        Ok(len)
    }
}

/// A block: header plus transactions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Recomputes the merkle root over the transaction ids.
    ///
    /// Pairs are hashed bottom-up; an odd layer duplicates its last entry.
    /// Returns `None` for a block with no transactions.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        let mut layer: Vec<sha256d::Hash> = self
            .transactions
            .iter()
            .map(|tx| sha256d::Hash::from_byte_array(tx.txid().to_byte_array()))
            .collect();
        if layer.is_empty() {
            return None;
        }

        while layer.len() > 1 {
            let mut next = Vec::with_capacity(layer.len().div_ceil(2));
            for pair in layer.chunks(2) {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                let mut concat = [0u8; 64];
                concat[..32].copy_from_slice(left.as_byte_array());
                concat[32..].copy_from_slice(right.as_byte_array());
                next.push(sha256d::Hash::hash(&concat));
            }
            layer = next;
        }

        Some(TxMerkleNode::from_byte_array(layer[0].to_byte_array()))
    }
}

impl Encodable for Block {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        let mut len = self.header.consensus_encode(writer)?;
        len += VarInt(self.transactions.len() as u64).consensus_encode(writer)?;
        for tx in &self.transactions {
            len += tx.consensus_encode(writer)?;
        }
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockdata::transaction::{OutPoint, TxIn, TxOut};

    fn tx_with_sig(byte: u8) -> Transaction {
        Transaction {
            version: 1,
            inputs: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: vec![byte],
                sequence: u32::MAX,
            }],
            outputs: vec![TxOut {
                value: 0,
                script_pubkey: Vec::new(),
            }],
            lock_time: 0,
        }
    }

    fn header() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_block_hash: BlockHash::from_byte_array([0u8; 32]),
            merkle_root: TxMerkleNode::from_byte_array([0u8; 32]),
            time: 1566556888,
            bits: 0x1e0ffff0,
            nonce: 350780,
        }
    }

    #[test]
    fn test_header_serializes_to_80_bytes() {
        let mut bytes = Vec::new();
        let len = header().consensus_encode(&mut bytes).unwrap();
        assert_eq!(len, 80);
        assert_eq!(bytes.len(), 80);
    }

    #[test]
    fn test_single_transaction_merkle_root_is_txid() {
        let tx = tx_with_sig(0x01);
        let block = Block {
            header: header(),
            transactions: vec![tx.clone()],
        };
        assert_eq!(
            block.compute_merkle_root().unwrap().to_byte_array(),
            tx.txid().to_byte_array()
        );
    }

    #[test]
    fn test_odd_layer_duplicates_last_txid() {
        let block = Block {
            header: header(),
            transactions: vec![tx_with_sig(0x01), tx_with_sig(0x02), tx_with_sig(0x03)],
        };
        // Three leaves hash like four with the last duplicated.
        let padded = Block {
            header: header(),
            transactions: vec![
                tx_with_sig(0x01),
                tx_with_sig(0x02),
                tx_with_sig(0x03),
                tx_with_sig(0x03),
            ],
        };
        assert_eq!(block.compute_merkle_root(), padded.compute_merkle_root());
    }

    #[test]
    fn test_empty_block_has_no_merkle_root() {
        let block = Block {
            header: header(),
            transactions: Vec::new(),
        };
        assert!(block.compute_merkle_root().is_none());
    }

    #[test]
    fn test_header_hash_depends_on_nonce() {
        let a = header();
        let mut b = a;
        b.nonce += 1;
        assert_ne!(a.block_hash(), b.block_hash());
    }
}
