//! Analog reading → two data bytes.
//!
//! The reference host decoder expects the low nibble in `data1` and the
//! remaining bits in `data2`.  That split is lossless for readings of up to
//! 12 bits; wider readings need [`ValueEncoding::LittleEndian16`], which
//! breaks compatibility with that decoder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueEncoding {
    /// `data1 = v & 0x0F`, `data2 = v >> 4`.
    #[default]
    NibbleSplit,
    /// `data1 = v & 0xFF`, `data2 = v >> 8`.
    LittleEndian16,
}

impl ValueEncoding {
    /// Split a raw reading into `(data1, data2)`.
    pub const fn encode(self, raw: u16) -> (u8, u8) {
        match self {
            Self::NibbleSplit => ((raw & 0x0F) as u8, (raw >> 4) as u8),
            Self::LittleEndian16 => {
                let [lo, hi] = raw.to_le_bytes();
                (lo, hi)
            }
        }
    }

    /// Rebuild a raw reading from `(data1, data2)`.
    pub const fn decode(self, data1: u8, data2: u8) -> u16 {
        match self {
            Self::NibbleSplit => ((data2 as u16) << 4) | (data1 & 0x0F) as u16,
            Self::LittleEndian16 => u16::from_le_bytes([data1, data2]),
        }
    }

    /// Widest ADC reading this encoding carries without losing bits.
    pub const fn max_lossless_bits(self) -> u8 {
        match self {
            Self::NibbleSplit => 12,
            Self::LittleEndian16 => 16,
        }
    }
}
