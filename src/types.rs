// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Broad classification of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    CipherEncrypt,
    CipherDecrypt,
    Digest,
    Passthrough,
    NullDigest,
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CipherEncrypt => "symmetric cipher (encryptor)",
            Self::CipherDecrypt => "symmetric cipher (decryptor)",
            Self::Digest => "hash",
            Self::Passthrough => "passthrough",
            Self::NullDigest => "null hash",
        };
        write!(f, "{name}")
    }
}

/// The cryptographic provider implementing an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    RustCrypto,
    OpenSsl,
    /// `copy` and `nohash` belong to no provider.
    None,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::RustCrypto => "rustcrypto",
            Self::OpenSsl => "openssl",
            Self::None => "none",
        };
        write!(f, "{name}")
    }
}

/// Block cipher chaining mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockMode {
    Cbc,
    Ecb,
}

impl BlockMode {
    /// Whether the mode consumes an initialization vector.
    pub fn requires_iv(&self) -> bool {
        matches!(self, Self::Cbc)
    }
}

impl std::fmt::Display for BlockMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cbc => write!(f, "CBC"),
            Self::Ecb => write!(f, "ECB"),
        }
    }
}

/// AES parameters of a cipher entry. The family is always AES; the block
/// size is 16 bytes for every key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherSpec {
    pub key_bits: u16,
    pub mode: BlockMode,
}

impl CipherSpec {
    pub const BLOCK_SIZE: usize = 16;

    pub fn key_size(&self) -> usize {
        usize::from(self.key_bits) / 8
    }
}

/// Hash functions offered across the two backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Ripemd128,
    Ripemd160,
    Ripemd256,
    Ripemd320,
    Tiger192,
}

impl HashFunction {
    /// Digest length in bytes.
    pub fn output_size(&self) -> usize {
        match self {
            Self::Md5 | Self::Ripemd128 => 16,
            Self::Sha1 | Self::Ripemd160 => 20,
            Self::Tiger192 => 24,
            Self::Sha224 => 28,
            Self::Sha256 | Self::Ripemd256 => 32,
            Self::Ripemd320 => 40,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

impl std::fmt::Display for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Ripemd128 => "RIPEMD-128",
            Self::Ripemd160 => "RIPEMD-160",
            Self::Ripemd256 => "RIPEMD-256",
            Self::Ripemd320 => "RIPEMD-320",
            Self::Tiger192 => "Tiger-192",
        };
        write!(f, "{name}")
    }
}

/// One immutable catalog entry. The canonical name is the unique key the
/// registry and the command line agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub family: Family,
    pub backend: Backend,
    pub cipher: Option<CipherSpec>,
    pub hash: Option<HashFunction>,
    pub description: &'static str,
}

impl Descriptor {
    /// Required key size in bytes, 0 for keyless entries.
    pub fn key_size(&self) -> usize {
        self.cipher.map(|c| c.key_size()).unwrap_or(0)
    }
}
