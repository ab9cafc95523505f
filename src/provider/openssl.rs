// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Provider backed by the system OpenSSL library.
//!
//! `Crypter` handles PKCS#7 padding internally, so the cipher adapter here
//! only forwards chunks and drains the output buffer; there is no partial
//! block bookkeeping of our own.

use openssl::hash::{Hasher, MessageDigest};
use openssl::symm::{Cipher as OsslCipher, Crypter, Mode};

use crate::error::{CryptoError, Result};
use crate::provider::Transform;
use crate::types::{BlockMode, CipherSpec, HashFunction};

fn backend_error(err: openssl::error::ErrorStack) -> CryptoError {
    CryptoError::BackendFailure(err.to_string())
}

fn select_cipher(spec: CipherSpec) -> Result<OsslCipher> {
    Ok(match (spec.key_bits, spec.mode) {
        (128, BlockMode::Cbc) => OsslCipher::aes_128_cbc(),
        (192, BlockMode::Cbc) => OsslCipher::aes_192_cbc(),
        (256, BlockMode::Cbc) => OsslCipher::aes_256_cbc(),
        (128, BlockMode::Ecb) => OsslCipher::aes_128_ecb(),
        (192, BlockMode::Ecb) => OsslCipher::aes_192_ecb(),
        (256, BlockMode::Ecb) => OsslCipher::aes_256_ecb(),
        (bits, _) => {
            return Err(CryptoError::InvalidParameter(format!(
                "unsupported AES key size: {bits} bits"
            )))
        }
    })
}

fn select_digest(hash: HashFunction) -> Result<MessageDigest> {
    Ok(match hash {
        HashFunction::Md5 => MessageDigest::md5(),
        HashFunction::Sha1 => MessageDigest::sha1(),
        HashFunction::Sha224 => MessageDigest::sha224(),
        HashFunction::Sha256 => MessageDigest::sha256(),
        HashFunction::Sha384 => MessageDigest::sha384(),
        HashFunction::Sha512 => MessageDigest::sha512(),
        HashFunction::Ripemd160 => MessageDigest::ripemd160(),
        other => {
            return Err(CryptoError::InvalidParameter(format!(
                "digest {other} is not available through OpenSSL"
            )))
        }
    })
}

struct CrypterTransform {
    crypter: Crypter,
    block_size: usize,
}

impl Transform for CrypterTransform {
    fn update(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<()> {
        if input.is_empty() {
            return Ok(());
        }
        let mut buf = vec![0u8; input.len() + self.block_size];
        let written = self
            .crypter
            .update(input, &mut buf)
            .map_err(backend_error)?;
        out.extend_from_slice(&buf[..written]);
        Ok(())
    }

    fn finalize(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let mut buf = vec![0u8; 2 * self.block_size];
        let written = self.crypter.finalize(&mut buf).map_err(backend_error)?;
        out.extend_from_slice(&buf[..written]);
        Ok(())
    }
}

struct HasherTransform {
    hasher: Hasher,
}

impl Transform for HasherTransform {
    fn update(&mut self, input: &[u8], _out: &mut Vec<u8>) -> Result<()> {
        self.hasher.update(input).map_err(backend_error)
    }

    fn finalize(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let bytes = self.hasher.finish().map_err(backend_error)?;
        out.extend_from_slice(&bytes);
        Ok(())
    }
}

pub fn cipher(
    spec: CipherSpec,
    encrypt: bool,
    key: &[u8],
    iv: Option<&[u8]>,
) -> Result<Box<dyn Transform>> {
    if spec.mode.requires_iv() && iv.is_none() {
        return Err(CryptoError::InvalidParameter("CBC mode requires an IV".into()));
    }
    let ossl = select_cipher(spec)?;
    let mode = if encrypt { Mode::Encrypt } else { Mode::Decrypt };
    let iv = if spec.mode.requires_iv() { iv } else { None };
    let mut crypter = Crypter::new(ossl, mode, key, iv).map_err(backend_error)?;
    crypter.pad(true);
    Ok(Box::new(CrypterTransform {
        crypter,
        block_size: ossl.block_size(),
    }))
}

pub fn digest(hash: HashFunction) -> Result<Box<dyn Transform>> {
    let hasher = Hasher::new(select_digest(hash)?).map_err(backend_error)?;
    Ok(Box::new(HasherTransform { hasher }))
}
