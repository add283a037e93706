use hex::ToHex;
use sha2::{Digest, Sha256};

use super::Receipt;

impl Receipt {
    /// Encode a receipt into binary form
    ///
    /// +--------+--------+--------------------+----------------------+
    /// | payer  | share  | amount (16 B)      | recorded_at (8 B)    |
    /// +--------+--------+--------------------+----------------------+
    /// | nanos (4 B)     | label_len (4 B)    |                      |
    /// +-----------------+--------------------+                      +
    /// | label data (variable length)                                |
    /// +-------------------------------------------------------------+
    ///
    /// Integers are little-endian, amount uses the decimal's own 16 byte layout.
    pub(crate) fn encode(&self) -> Vec<u8> {
        let mut output = Vec::with_capacity(34 + self.label.len());
        output.push(self.payer.tag());
        output.push(self.share.percent());
        output.extend_from_slice(&self.amount.serialize());
        output.extend_from_slice(&self.recorded_at.timestamp().to_le_bytes());
        output.extend_from_slice(&self.recorded_at.timestamp_subsec_nanos().to_le_bytes());
        output.extend_from_slice(&(self.label.len() as u32).to_le_bytes());
        output.extend_from_slice(self.label.as_bytes());
        output
    }

    /// Hex id of this receipt when appended after `previous`.
    pub(crate) fn chained_hash(&self, previous: Option<&str>) -> String {
        let mut hasher = Sha256::new();
        if let Some(previous) = previous {
            hasher.update(previous.as_bytes());
        }
        hasher.update(self.encode());
        hasher.finalize().encode_hex()
    }
}
