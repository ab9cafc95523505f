// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Identity transform behind the `copy` catalog entry.

use crate::error::Result;
use crate::provider::Transform;

/// Emits its input unchanged. Useful for plumbing checks and as the
/// degenerate case of the streaming pipeline.
pub struct Copy;

impl Copy {
    pub fn new() -> Self {
        Copy
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for Copy {
    fn update(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(input);
        Ok(())
    }

    fn finalize(&mut self, _out: &mut Vec<u8>) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_is_identity() {
        let mut copy = Copy::new();
        let mut out = Vec::new();
        copy.update(b"first ", &mut out).unwrap();
        copy.update(b"second", &mut out).unwrap();
        copy.finalize(&mut out).unwrap();
        assert_eq!(out, b"first second");
    }

    #[test]
    fn test_copy_empty_input() {
        let mut copy = Copy::new();
        let mut out = Vec::new();
        copy.update(b"", &mut out).unwrap();
        copy.finalize(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
