//! Just enough script building to reconstruct the genesis coinbase.

/// The `OP_CHECKSIG` opcode.
pub const OP_CHECKSIG: u8 = 0xac;

const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_PUSHDATA4: u8 = 0x4e;

/// Builds raw script bytes push by push.
#[derive(Clone, Debug, Default)]
pub struct ScriptBuilder(Vec<u8>);

impl ScriptBuilder {
    pub fn new() -> Self {
        ScriptBuilder(Vec::new())
    }

    /// Appends a data push of `data`, choosing the shortest push opcode.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        match data.len() {
            n if n < OP_PUSHDATA1 as usize => self.0.push(n as u8),
            n if n <= u8::MAX as usize => {
                self.0.push(OP_PUSHDATA1);
                self.0.push(n as u8);
            }
            n if n <= u16::MAX as usize => {
                self.0.push(OP_PUSHDATA2);
                self.0.extend_from_slice(&(n as u16).to_le_bytes());
            }
            n => {
                self.0.push(OP_PUSHDATA4);
                self.0.extend_from_slice(&(n as u32).to_le_bytes());
            }
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Appends a number as a minimally-encoded script integer data push.
    ///
    /// This is the `CScriptNum` serialization: little-endian, shortest form,
    /// with a leading sign byte only when the high bit of the top byte is
    /// set. Note that small values are still pushed as data here, never
    /// folded into `OP_1`..`OP_16`, matching how the genesis scriptSig was
    /// originally built.
    pub fn push_scriptnum(self, value: i64) -> Self {
        self.push_slice(&scriptnum_bytes(value))
    }

    /// Appends a raw opcode.
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

fn scriptnum_bytes(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // If the top byte carries the 0x80 bit we need an extra byte so the
    // value doesn't read back as negative.
    let top_bit_set = out.last().is_some_and(|b| b & 0x80 != 0);
    match (negative, top_bit_set) {
        (false, true) => out.push(0x00),
        (true, true) => out.push(0x80),
        (true, false) => {
            if let Some(last) = out.last_mut() {
                *last |= 0x80;
            }
        }
        (false, false) => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scriptnum_minimal_encoding() {
        assert_eq!(scriptnum_bytes(0), Vec::<u8>::new());
        assert_eq!(scriptnum_bytes(4), vec![0x04]);
        assert_eq!(scriptnum_bytes(127), vec![0x7f]);
        assert_eq!(scriptnum_bytes(128), vec![0x80, 0x00]);
        assert_eq!(scriptnum_bytes(-4), vec![0x84]);
        assert_eq!(scriptnum_bytes(-128), vec![0x80, 0x80]);
        // The genesis scriptSig difficulty constant.
        assert_eq!(scriptnum_bytes(486604799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_push_scriptnum_emits_data_push() {
        let script = ScriptBuilder::new().push_scriptnum(4).into_bytes();
        assert_eq!(script, vec![0x01, 0x04]);

        let script = ScriptBuilder::new().push_scriptnum(486604799).into_bytes();
        assert_eq!(script, vec![0x04, 0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_push_slice_opcode_selection() {
        let short = ScriptBuilder::new().push_slice(&[0u8; 10]).into_bytes();
        assert_eq!(short[0], 10);
        assert_eq!(short.len(), 11);

        let mid = ScriptBuilder::new().push_slice(&[0u8; 80]).into_bytes();
        assert_eq!(&mid[..2], &[OP_PUSHDATA1, 80]);
        assert_eq!(mid.len(), 82);

        let long = ScriptBuilder::new().push_slice(&[0u8; 300]).into_bytes();
        assert_eq!(long[0], OP_PUSHDATA2);
        assert_eq!(u16::from_le_bytes([long[1], long[2]]), 300);
        assert_eq!(long.len(), 303);
    }

    #[test]
    fn test_push_opcode() {
        let script = ScriptBuilder::new().push_opcode(OP_CHECKSIG).into_bytes();
        assert_eq!(script, vec![OP_CHECKSIG]);
    }
}
