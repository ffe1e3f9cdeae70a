//! Codec configuration.

use crate::header::MAGIC_NUMBER;
use grin_core::BitMode;

/// Codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Magic number written and expected at the start of a container.
    pub magic: u32,
    /// How the encoder materializes bits. Decoding always reads packed bits.
    pub bit_mode: BitMode,
}

impl CodecConfig {
    /// Standard container configuration.
    ///
    /// - Magic number 1846
    /// - Packed MSB-first bits
    pub const DEFAULT: Self = Self {
        magic: MAGIC_NUMBER,
        bit_mode: BitMode::Packed,
    };

    /// Human-readable configuration.
    ///
    /// - Magic number 1846
    /// - Every bit written as an ASCII '0' or '1'
    ///
    /// Output produced with this configuration is not a valid container.
    pub const DEBUG: Self = Self {
        magic: MAGIC_NUMBER,
        bit_mode: BitMode::Ascii,
    };

    /// Configuration with a custom magic number and packed bits.
    pub fn with_magic(magic: u32) -> Self {
        Self {
            magic,
            bit_mode: BitMode::Packed,
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.magic, 1846);
        assert_eq!(config.bit_mode, BitMode::Packed);
    }

    #[test]
    fn test_debug_config() {
        let config = CodecConfig::DEBUG;
        assert_eq!(config.magic, 1846);
        assert_eq!(config.bit_mode, BitMode::Ascii);
    }
}
