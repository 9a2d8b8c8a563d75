use crate::consensus::{Encodable, VarInt};
use crate::hashes::{sha256d, Hash, Txid};
use crate::io::{Error as IoError, Write};

/// A reference to an output of a previous transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutPoint {
    pub txid: Txid,
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint used by coinbase inputs.
    pub fn null() -> Self {
        OutPoint {
            txid: Txid::from_byte_array([0u8; 32]),
            vout: u32::MAX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOut {
    pub value: u64,
    pub script_pubkey: Vec<u8>,
}

/// A transaction, serialized in the pre-segwit form the chain uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Computes the transaction identity hash over the serialized bytes.
    pub fn txid(&self) -> Txid {
        let mut bytes = Vec::new();
        self.consensus_encode(&mut bytes)
            .expect("in-memory writers don't error");
        Txid::from_byte_array(sha256d::Hash::hash(&bytes).to_byte_array())
    }
}

impl Encodable for OutPoint {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        let mut len = self.txid.consensus_encode(writer)?;
        len += self.vout.consensus_encode(writer)?;
        Ok(len)
    }
}

impl Encodable for TxIn {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        let mut len = self.previous_output.consensus_encode(writer)?;
        len += self.script_sig.consensus_encode(writer)?;
        len += self.sequence.consensus_encode(writer)?;
        Ok(len)
    }
}

impl Encodable for TxOut {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        let mut len = self.value.consensus_encode(writer)?;
        len += self.script_pubkey.consensus_encode(writer)?;
        Ok(len)
    }
}

impl Encodable for Transaction {
    fn consensus_encode<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize, IoError> {
        let mut len = self.version.consensus_encode(writer)?;
        len += VarInt(self.inputs.len() as u64).consensus_encode(writer)?;
        for input in &self.inputs {
            len += input.consensus_encode(writer)?;
        }
        len += VarInt(self.outputs.len() as u64).consensus_encode(writer)?;
        for output in &self.outputs {
            len += output.consensus_encode(writer)?;
        }
        len += self.lock_time.consensus_encode(writer)?;
        Ok(len)
    }
}
