// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Human-readable rendering for the listing and describe surfaces.
//!
//! Rendering is separated from the binary so write errors propagate as
//! [`CryptoError::WriteFailure`] instead of being swallowed at the
//! `println!` boundary.

use std::io::Write;

use crate::error::{CryptoError, Result};
use crate::registry;
use crate::types::CipherSpec;

/// Writes the full algorithm listing: one canonical name per line,
/// prefixed by exactly two spaces, lexicographic order, no header and
/// no trailing blank line.
pub fn write_list(out: &mut dyn Write) -> Result<()> {
    for name in registry::list() {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}

/// Writes the details of one catalog entry.
pub fn write_details(name: &str, out: &mut dyn Write) -> Result<()> {
    let desc = registry::lookup(name)
        .ok_or_else(|| CryptoError::UnknownAlgorithm(name.to_string()))?;
    writeln!(out, "{}", desc.name)?;
    writeln!(out, "  backend:     {}", desc.backend)?;
    writeln!(out, "  family:      {}", desc.family)?;
    writeln!(out, "  description: {}", desc.description)?;
    if let Some(spec) = desc.cipher {
        writeln!(out, "  key size:    {} bytes", desc.key_size())?;
        if spec.mode.requires_iv() {
            writeln!(out, "  iv size:     {} bytes", CipherSpec::BLOCK_SIZE)?;
        }
    }
    if let Some(hash) = desc.hash {
        writeln!(out, "  output size: {} bytes", hash.output_size())?;
    }
    Ok(())
}
