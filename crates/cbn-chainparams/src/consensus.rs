pub use encode::{Encodable, VarInt};

pub mod encode {
    pub use bitcoin::consensus::encode::{Encodable, VarInt};
}
