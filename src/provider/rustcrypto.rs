// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Pure Rust provider built on the RustCrypto crates.
//!
//! Cipher adapters buffer at most one partial input block between `update`
//! calls; PKCS#7 padding is applied (and stripped) at `finalize`. The
//! decryptor additionally holds back the last full ciphertext block until
//! the stream closes, since only then is it known to carry the padding.

use cipher::consts::U16;
use cipher::{Block, BlockDecryptMut, BlockEncryptMut, BlockSizeUser, KeyInit, KeyIvInit};
use sha2::Digest;

use crate::error::{CryptoError, Result};
use crate::provider::pkcs7::Pkcs7Padding;
use crate::provider::Transform;
use crate::types::{BlockMode, CipherSpec, HashFunction};

const BLOCK: usize = CipherSpec::BLOCK_SIZE;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes192CbcEnc = cbc::Encryptor<aes::Aes192>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type Aes128EcbEnc = ecb::Encryptor<aes::Aes128>;
type Aes128EcbDec = ecb::Decryptor<aes::Aes128>;
type Aes192EcbEnc = ecb::Encryptor<aes::Aes192>;
type Aes192EcbDec = ecb::Decryptor<aes::Aes192>;
type Aes256EcbEnc = ecb::Encryptor<aes::Aes256>;
type Aes256EcbDec = ecb::Decryptor<aes::Aes256>;

fn invalid_material(_: cipher::InvalidLength) -> CryptoError {
    CryptoError::BackendFailure("invalid key or IV length".into())
}

/// Streaming encryptor over any 16-byte block mode (CBC or ECB).
struct ModeEncryptor<M>
where
    M: BlockEncryptMut + BlockSizeUser<BlockSize = U16>,
{
    mode: M,
    pending: Vec<u8>,
}

impl<M> ModeEncryptor<M>
where
    M: BlockEncryptMut + BlockSizeUser<BlockSize = U16>,
{
    fn new(mode: M) -> Self {
        Self {
            mode,
            pending: Vec::with_capacity(BLOCK),
        }
    }

    fn encrypt_blocks(&mut self, data: &[u8], out: &mut Vec<u8>) {
        for chunk in data.chunks_exact(BLOCK) {
            let mut block = Block::<M>::clone_from_slice(chunk);
            self.mode.encrypt_block_mut(&mut block);
            out.extend_from_slice(&block);
        }
    }
}

impl<M> Transform for ModeEncryptor<M>
where
    M: BlockEncryptMut + BlockSizeUser<BlockSize = U16>,
{
    fn update(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<()> {
        self.pending.extend_from_slice(input);
        let full = self.pending.len() - self.pending.len() % BLOCK;
        let ready = self.pending[..full].to_vec();
        self.encrypt_blocks(&ready, out);
        self.pending.drain(..full);
        Ok(())
    }

    fn finalize(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let padded = Pkcs7Padding::pad(&self.pending, BLOCK)?;
        self.pending.clear();
        self.encrypt_blocks(&padded, out);
        Ok(())
    }
}

/// Streaming decryptor counterpart of [`ModeEncryptor`].
struct ModeDecryptor<M>
where
    M: BlockDecryptMut + BlockSizeUser<BlockSize = U16>,
{
    mode: M,
    pending: Vec<u8>,
}

impl<M> ModeDecryptor<M>
where
    M: BlockDecryptMut + BlockSizeUser<BlockSize = U16>,
{
    fn new(mode: M) -> Self {
        Self {
            mode,
            pending: Vec::with_capacity(2 * BLOCK),
        }
    }

    fn decrypt_blocks(&mut self, data: &[u8], out: &mut Vec<u8>) {
        for chunk in data.chunks_exact(BLOCK) {
            let mut block = Block::<M>::clone_from_slice(chunk);
            self.mode.decrypt_block_mut(&mut block);
            out.extend_from_slice(&block);
        }
    }
}

impl<M> Transform for ModeDecryptor<M>
where
    M: BlockDecryptMut + BlockSizeUser<BlockSize = U16>,
{
    fn update(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<()> {
        self.pending.extend_from_slice(input);

        // The final block carries the padding, so it may only be decrypted
        // at finalize. Everything before the smallest suffix that could
        // still become the final block is safe to emit now.
        let rem = self.pending.len() % BLOCK;
        let holdback = if rem == 0 { BLOCK } else { rem };
        if self.pending.len() > holdback {
            let full = self.pending.len() - holdback;
            let ready = self.pending[..full].to_vec();
            self.decrypt_blocks(&ready, out);
            self.pending.drain(..full);
        }
        Ok(())
    }

    fn finalize(&mut self, out: &mut Vec<u8>) -> Result<()> {
        if self.pending.is_empty() {
            return Err(CryptoError::BackendFailure("ciphertext is empty".into()));
        }
        if self.pending.len() != BLOCK {
            return Err(CryptoError::BackendFailure(
                "ciphertext length is not a multiple of the cipher block size".into(),
            ));
        }
        let last = self.pending.clone();
        self.pending.clear();
        let mut plain = Vec::with_capacity(BLOCK);
        self.decrypt_blocks(&last, &mut plain);
        out.extend_from_slice(&Pkcs7Padding::unpad(&plain, BLOCK)?);
        Ok(())
    }
}

/// Digest adapter over any RustCrypto hasher.
struct DigestTransform<D: Digest> {
    hasher: D,
}

impl<D: Digest> DigestTransform<D> {
    fn new() -> Self {
        Self { hasher: D::new() }
    }
}

impl<D: Digest> Transform for DigestTransform<D> {
    fn update(&mut self, input: &[u8], _out: &mut Vec<u8>) -> Result<()> {
        self.hasher.update(input);
        Ok(())
    }

    fn finalize(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let hasher = std::mem::replace(&mut self.hasher, D::new());
        out.extend_from_slice(&hasher.finalize());
        Ok(())
    }
}

pub fn cipher(
    spec: CipherSpec,
    encrypt: bool,
    key: &[u8],
    iv: Option<&[u8]>,
) -> Result<Box<dyn Transform>> {
    match spec.mode {
        BlockMode::Cbc => {
            let iv = iv.ok_or_else(|| {
                CryptoError::InvalidParameter("CBC mode requires an IV".into())
            })?;
            match (spec.key_bits, encrypt) {
                (128, true) => Ok(Box::new(ModeEncryptor::new(
                    Aes128CbcEnc::new_from_slices(key, iv).map_err(invalid_material)?,
                ))),
                (128, false) => Ok(Box::new(ModeDecryptor::new(
                    Aes128CbcDec::new_from_slices(key, iv).map_err(invalid_material)?,
                ))),
                (192, true) => Ok(Box::new(ModeEncryptor::new(
                    Aes192CbcEnc::new_from_slices(key, iv).map_err(invalid_material)?,
                ))),
                (192, false) => Ok(Box::new(ModeDecryptor::new(
                    Aes192CbcDec::new_from_slices(key, iv).map_err(invalid_material)?,
                ))),
                (256, true) => Ok(Box::new(ModeEncryptor::new(
                    Aes256CbcEnc::new_from_slices(key, iv).map_err(invalid_material)?,
                ))),
                (256, false) => Ok(Box::new(ModeDecryptor::new(
                    Aes256CbcDec::new_from_slices(key, iv).map_err(invalid_material)?,
                ))),
                (bits, _) => Err(CryptoError::InvalidParameter(format!(
                    "unsupported AES key size: {bits} bits"
                ))),
            }
        }
        BlockMode::Ecb => match (spec.key_bits, encrypt) {
            (128, true) => Ok(Box::new(ModeEncryptor::new(
                Aes128EcbEnc::new_from_slice(key).map_err(invalid_material)?,
            ))),
            (128, false) => Ok(Box::new(ModeDecryptor::new(
                Aes128EcbDec::new_from_slice(key).map_err(invalid_material)?,
            ))),
            (192, true) => Ok(Box::new(ModeEncryptor::new(
                Aes192EcbEnc::new_from_slice(key).map_err(invalid_material)?,
            ))),
            (192, false) => Ok(Box::new(ModeDecryptor::new(
                Aes192EcbDec::new_from_slice(key).map_err(invalid_material)?,
            ))),
            (256, true) => Ok(Box::new(ModeEncryptor::new(
                Aes256EcbEnc::new_from_slice(key).map_err(invalid_material)?,
            ))),
            (256, false) => Ok(Box::new(ModeDecryptor::new(
                Aes256EcbDec::new_from_slice(key).map_err(invalid_material)?,
            ))),
            (bits, _) => Err(CryptoError::InvalidParameter(format!(
                "unsupported AES key size: {bits} bits"
            ))),
        },
    }
}

pub fn digest(hash: HashFunction) -> Result<Box<dyn Transform>> {
    Ok(match hash {
        HashFunction::Md5 => Box::new(DigestTransform::<md5::Md5>::new()),
        HashFunction::Sha1 => Box::new(DigestTransform::<sha1::Sha1>::new()),
        HashFunction::Sha224 => Box::new(DigestTransform::<sha2::Sha224>::new()),
        HashFunction::Sha256 => Box::new(DigestTransform::<sha2::Sha256>::new()),
        HashFunction::Sha384 => Box::new(DigestTransform::<sha2::Sha384>::new()),
        HashFunction::Sha512 => Box::new(DigestTransform::<sha2::Sha512>::new()),
        HashFunction::Ripemd128 => Box::new(DigestTransform::<ripemd::Ripemd128>::new()),
        HashFunction::Ripemd160 => Box::new(DigestTransform::<ripemd::Ripemd160>::new()),
        HashFunction::Ripemd256 => Box::new(DigestTransform::<ripemd::Ripemd256>::new()),
        HashFunction::Ripemd320 => Box::new(DigestTransform::<ripemd::Ripemd320>::new()),
        HashFunction::Tiger192 => Box::new(DigestTransform::<tiger::Tiger>::new()),
    })
}
