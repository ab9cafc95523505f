// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::error::{CryptoError, Result};

/// PKCS#7 padding used by the pure Rust cipher adapters.
pub struct Pkcs7Padding;

impl Pkcs7Padding {
    /// Pads `data` up to the next multiple of `block_size`.
    ///
    /// The pad is always 1..=block_size bytes; data that is already a
    /// block multiple gains one full padding block.
    pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        if !(2..=255).contains(&block_size) {
            return Err(CryptoError::InvalidParameter(format!(
                "Invalid block size: {block_size}"
            )));
        }

        let padding_len = block_size - (data.len() % block_size);
        let mut result = data.to_vec();
        result.extend(std::iter::repeat(padding_len as u8).take(padding_len));
        Ok(result)
    }

    /// Removes PKCS#7 padding, verifying every padding byte.
    pub fn unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        if !(2..=255).contains(&block_size) {
            return Err(CryptoError::InvalidParameter(format!(
                "Invalid block size: {block_size}"
            )));
        }

        if data.len() < block_size || data.len() % block_size != 0 {
            return Err(CryptoError::BackendFailure(
                "Invalid padded data length".into(),
            ));
        }

        let padding_len = data[data.len() - 1] as usize;
        if padding_len == 0 || padding_len > block_size {
            return Err(CryptoError::BackendFailure("Invalid padding length".into()));
        }

        for i in 1..=padding_len {
            if data[data.len() - i] != padding_len as u8 {
                return Err(CryptoError::BackendFailure("Invalid padding bytes".into()));
            }
        }

        Ok(data[..data.len() - padding_len].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pkcs7_pad_normal() {
        let data = b"Hello World";
        let padded = Pkcs7Padding::pad(data, 16).unwrap();
        assert_eq!(padded.len(), 16);
        for i in 11..16 {
            assert_eq!(padded[i], 5);
        }
    }

    #[test]
    fn test_pkcs7_pad_exact_block() {
        let data = b"1234567890123456";
        let padded = Pkcs7Padding::pad(data, 16).unwrap();
        assert_eq!(padded.len(), 32);
        assert_eq!(padded[16], 16);
        assert_eq!(padded[31], 16);
    }

    #[test]
    fn test_pkcs7_pad_empty() {
        let padded = Pkcs7Padding::pad(b"", 16).unwrap();
        assert_eq!(padded, vec![16u8; 16]);
    }

    #[test]
    fn test_pkcs7_round_trip() {
        for data in [&b""[..], b"x", b"Hello World", b"1234567890123456"] {
            let padded = Pkcs7Padding::pad(data, 16).unwrap();
            let unpadded = Pkcs7Padding::unpad(&padded, 16).unwrap();
            assert_eq!(unpadded, data);
        }
    }

    #[test]
    fn test_pkcs7_invalid_block_size() {
        assert!(Pkcs7Padding::pad(b"test", 1).is_err());
        assert!(Pkcs7Padding::pad(b"test", 256).is_err());
        assert!(Pkcs7Padding::unpad(b"test", 1).is_err());
        assert!(Pkcs7Padding::unpad(b"test", 256).is_err());
    }

    #[test]
    fn test_pkcs7_invalid_padding() {
        let invalid = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 20];
        assert!(Pkcs7Padding::unpad(&invalid, 16).is_err());

        let lying = vec![0u8; 16];
        assert!(Pkcs7Padding::unpad(&lying, 16).is_err());
    }
}
