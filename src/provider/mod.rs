// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Backend adapters.
//!
//! Every algorithm, whatever its nature, is driven through the same
//! capability contract: feed input bytes in order with [`Transform::update`],
//! then close the stream with [`Transform::finalize`]. Ciphers emit output
//! incrementally from `update` and flush padding from `finalize`; digests
//! emit nothing until `finalize`; the passthrough echoes its input.
//!
//! The registry entry alone decides which provider implements the contract.

pub mod openssl;
pub mod passthrough;
mod pkcs7;
pub mod rustcrypto;

use zeroize::Zeroizing;

use crate::error::{CryptoError, Result};
use crate::types::{Backend, CipherSpec, Descriptor, Family};

/// Streaming bytes-in/bytes-out contract implemented once per provider.
///
/// `update` may be called repeatedly; produced output is appended to `out`.
/// The digest result is chunk-boundary independent, and cipher adapters
/// never hold more than a constant amount of buffered input.
pub trait Transform {
    fn update(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<()>;
    fn finalize(&mut self, out: &mut Vec<u8>) -> Result<()>;
}

/// Key material for one cipher invocation. Wiped on drop.
pub struct CipherParams {
    pub key: Zeroizing<Vec<u8>>,
    pub iv: Option<Zeroizing<Vec<u8>>>,
}

impl CipherParams {
    pub fn new(key: Vec<u8>, iv: Option<Vec<u8>>) -> Self {
        Self {
            key: Zeroizing::new(key),
            iv: iv.map(Zeroizing::new),
        }
    }
}

/// Builds the adapter for a catalog entry.
///
/// Fails before any input is read: missing or mis-sized key material and
/// the run-less `nohash` entry are rejected here.
pub fn create(desc: &Descriptor, params: Option<&CipherParams>) -> Result<Box<dyn Transform>> {
    match desc.family {
        Family::Passthrough => Ok(Box::new(passthrough::Copy::new())),
        Family::NullDigest => Err(CryptoError::InvalidParameter(format!(
            "'{}' declares no transform and cannot be run",
            desc.name
        ))),
        Family::Digest => {
            let hash = desc.hash.ok_or_else(|| {
                CryptoError::InvalidParameter(format!("digest entry '{}' has no hash spec", desc.name))
            })?;
            match desc.backend {
                Backend::RustCrypto => rustcrypto::digest(hash),
                Backend::OpenSsl => openssl::digest(hash),
                Backend::None => Err(CryptoError::InvalidParameter(format!(
                    "digest entry '{}' has no backend",
                    desc.name
                ))),
            }
        }
        Family::CipherEncrypt | Family::CipherDecrypt => {
            let spec = desc.cipher.ok_or_else(|| {
                CryptoError::InvalidParameter(format!("cipher entry '{}' has no cipher spec", desc.name))
            })?;
            let (key, iv) = cipher_material(desc.name, spec, params)?;
            let encrypt = desc.family == Family::CipherEncrypt;
            match desc.backend {
                Backend::RustCrypto => rustcrypto::cipher(spec, encrypt, key, iv),
                Backend::OpenSsl => openssl::cipher(spec, encrypt, key, iv),
                Backend::None => Err(CryptoError::InvalidParameter(format!(
                    "cipher entry '{}' has no backend",
                    desc.name
                ))),
            }
        }
    }
}

/// Validates key and IV against the cipher spec. ECB ignores any IV given.
fn cipher_material<'a>(
    name: &str,
    spec: CipherSpec,
    params: Option<&'a CipherParams>,
) -> Result<(&'a [u8], Option<&'a [u8]>)> {
    let params = params.ok_or_else(|| {
        CryptoError::InvalidParameter(format!("'{name}' requires key material; pass --key <hex>"))
    })?;

    if params.key.len() != spec.key_size() {
        return Err(CryptoError::InvalidKeySize {
            expected: spec.key_size(),
            actual: params.key.len(),
        });
    }

    let iv = if spec.mode.requires_iv() {
        let iv = params.iv.as_deref().ok_or_else(|| {
            CryptoError::InvalidParameter(format!(
                "'{name}' runs in CBC mode and requires --iv <hex>"
            ))
        })?;
        if iv.len() != CipherSpec::BLOCK_SIZE {
            return Err(CryptoError::InvalidParameter(format!(
                "IV must be {} bytes, got {}",
                CipherSpec::BLOCK_SIZE,
                iv.len()
            )));
        }
        Some(iv.as_slice())
    } else {
        None
    };

    Ok((&params.key, iv))
}
