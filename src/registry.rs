// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! The static algorithm catalog.
//!
//! Every algorithm the tool can run is declared here, once, as an immutable
//! [`Descriptor`]. The catalog is indexed at first use and is read-only for
//! the lifetime of the process. [`verify_catalog`] is the explicit
//! consistency pass over the declarations; it runs before dispatch so a
//! malformed catalog is a startup failure, not a latent runtime surprise.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::error::{CryptoError, Result};
use crate::types::{Backend, BlockMode, CipherSpec, Descriptor, Family, HashFunction};

const fn cipher(
    name: &'static str,
    backend: Backend,
    family: Family,
    key_bits: u16,
    mode: BlockMode,
    description: &'static str,
) -> Descriptor {
    Descriptor {
        name,
        family,
        backend,
        cipher: Some(CipherSpec { key_bits, mode }),
        hash: None,
        description,
    }
}

const fn digest(
    name: &'static str,
    backend: Backend,
    hash: HashFunction,
    description: &'static str,
) -> Descriptor {
    Descriptor {
        name,
        family: Family::Digest,
        backend,
        cipher: None,
        hash: Some(hash),
        description,
    }
}

/// All known algorithms. Declaration order is irrelevant; the index below
/// imposes the lexicographic order the listing surface promises.
static CATALOG: &[Descriptor] = &[
    // Special entries
    Descriptor {
        name: "copy",
        family: Family::Passthrough,
        backend: Backend::None,
        cipher: None,
        hash: None,
        description: "Identity transform: output bytes equal input bytes.",
    },
    Descriptor {
        name: "nohash",
        family: Family::NullDigest,
        backend: Backend::None,
        cipher: None,
        hash: None,
        description: "Null hash: a declared entry with no transform.",
    },
    // RustCrypto AES
    cipher("rustcrypto-aes-128-cbc-encryptor", Backend::RustCrypto, Family::CipherEncrypt, 128, BlockMode::Cbc, "RustCrypto AES 128 in CBC mode (encryptor part)."),
    cipher("rustcrypto-aes-128-cbc-decryptor", Backend::RustCrypto, Family::CipherDecrypt, 128, BlockMode::Cbc, "RustCrypto AES 128 in CBC mode (decryptor part)."),
    cipher("rustcrypto-aes-128-ecb-encryptor", Backend::RustCrypto, Family::CipherEncrypt, 128, BlockMode::Ecb, "RustCrypto AES 128 in ECB mode (encryptor part)."),
    cipher("rustcrypto-aes-128-ecb-decryptor", Backend::RustCrypto, Family::CipherDecrypt, 128, BlockMode::Ecb, "RustCrypto AES 128 in ECB mode (decryptor part)."),
    cipher("rustcrypto-aes-192-cbc-encryptor", Backend::RustCrypto, Family::CipherEncrypt, 192, BlockMode::Cbc, "RustCrypto AES 192 in CBC mode (encryptor part)."),
    cipher("rustcrypto-aes-192-cbc-decryptor", Backend::RustCrypto, Family::CipherDecrypt, 192, BlockMode::Cbc, "RustCrypto AES 192 in CBC mode (decryptor part)."),
    cipher("rustcrypto-aes-192-ecb-encryptor", Backend::RustCrypto, Family::CipherEncrypt, 192, BlockMode::Ecb, "RustCrypto AES 192 in ECB mode (encryptor part)."),
    cipher("rustcrypto-aes-192-ecb-decryptor", Backend::RustCrypto, Family::CipherDecrypt, 192, BlockMode::Ecb, "RustCrypto AES 192 in ECB mode (decryptor part)."),
    cipher("rustcrypto-aes-256-cbc-encryptor", Backend::RustCrypto, Family::CipherEncrypt, 256, BlockMode::Cbc, "RustCrypto AES 256 in CBC mode (encryptor part)."),
    cipher("rustcrypto-aes-256-cbc-decryptor", Backend::RustCrypto, Family::CipherDecrypt, 256, BlockMode::Cbc, "RustCrypto AES 256 in CBC mode (decryptor part)."),
    cipher("rustcrypto-aes-256-ecb-encryptor", Backend::RustCrypto, Family::CipherEncrypt, 256, BlockMode::Ecb, "RustCrypto AES 256 in ECB mode (encryptor part)."),
    cipher("rustcrypto-aes-256-ecb-decryptor", Backend::RustCrypto, Family::CipherDecrypt, 256, BlockMode::Ecb, "RustCrypto AES 256 in ECB mode (decryptor part)."),
    // OpenSSL AES
    cipher("openssl-aes-128-cbc-encryptor", Backend::OpenSsl, Family::CipherEncrypt, 128, BlockMode::Cbc, "OpenSSL AES 128 in CBC mode (encryptor part)."),
    cipher("openssl-aes-128-cbc-decryptor", Backend::OpenSsl, Family::CipherDecrypt, 128, BlockMode::Cbc, "OpenSSL AES 128 in CBC mode (decryptor part)."),
    cipher("openssl-aes-128-ecb-encryptor", Backend::OpenSsl, Family::CipherEncrypt, 128, BlockMode::Ecb, "OpenSSL AES 128 in ECB mode (encryptor part)."),
    cipher("openssl-aes-128-ecb-decryptor", Backend::OpenSsl, Family::CipherDecrypt, 128, BlockMode::Ecb, "OpenSSL AES 128 in ECB mode (decryptor part)."),
    cipher("openssl-aes-192-cbc-encryptor", Backend::OpenSsl, Family::CipherEncrypt, 192, BlockMode::Cbc, "OpenSSL AES 192 in CBC mode (encryptor part)."),
    cipher("openssl-aes-192-cbc-decryptor", Backend::OpenSsl, Family::CipherDecrypt, 192, BlockMode::Cbc, "OpenSSL AES 192 in CBC mode (decryptor part)."),
    cipher("openssl-aes-192-ecb-encryptor", Backend::OpenSsl, Family::CipherEncrypt, 192, BlockMode::Ecb, "OpenSSL AES 192 in ECB mode (encryptor part)."),
    cipher("openssl-aes-192-ecb-decryptor", Backend::OpenSsl, Family::CipherDecrypt, 192, BlockMode::Ecb, "OpenSSL AES 192 in ECB mode (decryptor part)."),
    cipher("openssl-aes-256-cbc-encryptor", Backend::OpenSsl, Family::CipherEncrypt, 256, BlockMode::Cbc, "OpenSSL AES 256 in CBC mode (encryptor part)."),
    cipher("openssl-aes-256-cbc-decryptor", Backend::OpenSsl, Family::CipherDecrypt, 256, BlockMode::Cbc, "OpenSSL AES 256 in CBC mode (decryptor part)."),
    cipher("openssl-aes-256-ecb-encryptor", Backend::OpenSsl, Family::CipherEncrypt, 256, BlockMode::Ecb, "OpenSSL AES 256 in ECB mode (encryptor part)."),
    cipher("openssl-aes-256-ecb-decryptor", Backend::OpenSsl, Family::CipherDecrypt, 256, BlockMode::Ecb, "OpenSSL AES 256 in ECB mode (decryptor part)."),
    // RustCrypto digests
    digest("rustcrypto-md5", Backend::RustCrypto, HashFunction::Md5, "RustCrypto MD5 message digest (128 bit)."),
    digest("rustcrypto-ripemd128", Backend::RustCrypto, HashFunction::Ripemd128, "RustCrypto RIPEMD message digest (128 bit)."),
    digest("rustcrypto-ripemd160", Backend::RustCrypto, HashFunction::Ripemd160, "RustCrypto RIPEMD message digest (160 bit)."),
    digest("rustcrypto-ripemd256", Backend::RustCrypto, HashFunction::Ripemd256, "RustCrypto RIPEMD message digest (256 bit)."),
    digest("rustcrypto-ripemd320", Backend::RustCrypto, HashFunction::Ripemd320, "RustCrypto RIPEMD message digest (320 bit)."),
    digest("rustcrypto-sha1", Backend::RustCrypto, HashFunction::Sha1, "RustCrypto SHA-1 message digest (160 bit)."),
    digest("rustcrypto-sha224", Backend::RustCrypto, HashFunction::Sha224, "RustCrypto SHA-2 message digest (224 bit)."),
    digest("rustcrypto-sha256", Backend::RustCrypto, HashFunction::Sha256, "RustCrypto SHA-2 message digest (256 bit)."),
    digest("rustcrypto-sha384", Backend::RustCrypto, HashFunction::Sha384, "RustCrypto SHA-2 message digest (384 bit)."),
    digest("rustcrypto-sha512", Backend::RustCrypto, HashFunction::Sha512, "RustCrypto SHA-2 message digest (512 bit)."),
    digest("rustcrypto-tiger192", Backend::RustCrypto, HashFunction::Tiger192, "RustCrypto Tiger message digest (192 bit)."),
    // OpenSSL digests
    digest("openssl-md5", Backend::OpenSsl, HashFunction::Md5, "OpenSSL MD5 message digest (128 bit)."),
    digest("openssl-ripemd160", Backend::OpenSsl, HashFunction::Ripemd160, "OpenSSL RIPEMD message digest (160 bit)."),
    digest("openssl-sha1", Backend::OpenSsl, HashFunction::Sha1, "OpenSSL SHA-1 message digest (160 bit)."),
    digest("openssl-sha224", Backend::OpenSsl, HashFunction::Sha224, "OpenSSL SHA-2 message digest (224 bit)."),
    digest("openssl-sha256", Backend::OpenSsl, HashFunction::Sha256, "OpenSSL SHA-2 message digest (256 bit)."),
    digest("openssl-sha384", Backend::OpenSsl, HashFunction::Sha384, "OpenSSL SHA-2 message digest (384 bit)."),
    digest("openssl-sha512", Backend::OpenSsl, HashFunction::Sha512, "OpenSSL SHA-2 message digest (512 bit)."),
];

static INDEX: Lazy<BTreeMap<&'static str, &'static Descriptor>> =
    Lazy::new(|| CATALOG.iter().map(|d| (d.name, d)).collect());

/// Look up a catalog entry by its canonical name.
pub fn lookup(name: &str) -> Option<&'static Descriptor> {
    INDEX.get(name).copied()
}

/// All canonical names, lexicographically ascending. Stable across calls.
pub fn list() -> Vec<&'static str> {
    INDEX.keys().copied().collect()
}

/// Explicit consistency pass over the catalog declarations.
///
/// Checks that names are unique, that cipher and digest entries carry the
/// matching spec, and that every encryptor has exactly one decryptor
/// sibling with identical backend, key size and mode.
pub fn verify_catalog() -> Result<()> {
    if INDEX.len() != CATALOG.len() {
        return Err(CryptoError::InvalidParameter(
            "algorithm catalog contains duplicate names".into(),
        ));
    }

    for desc in CATALOG {
        match desc.family {
            Family::CipherEncrypt | Family::CipherDecrypt => {
                if desc.cipher.is_none() || desc.hash.is_some() || desc.backend == Backend::None {
                    return Err(CryptoError::InvalidParameter(format!(
                        "malformed cipher entry '{}'",
                        desc.name
                    )));
                }
            }
            Family::Digest => {
                if desc.hash.is_none() || desc.cipher.is_some() || desc.backend == Backend::None {
                    return Err(CryptoError::InvalidParameter(format!(
                        "malformed digest entry '{}'",
                        desc.name
                    )));
                }
            }
            Family::Passthrough | Family::NullDigest => {
                if desc.cipher.is_some() || desc.hash.is_some() || desc.backend != Backend::None {
                    return Err(CryptoError::InvalidParameter(format!(
                        "malformed special entry '{}'",
                        desc.name
                    )));
                }
            }
        }

        if desc.family == Family::CipherEncrypt {
            let sibling_name = desc.name.replace("-encryptor", "-decryptor");
            let sibling = lookup(&sibling_name).ok_or_else(|| {
                CryptoError::InvalidParameter(format!(
                    "encryptor '{}' has no decryptor sibling",
                    desc.name
                ))
            })?;
            if sibling.family != Family::CipherDecrypt
                || sibling.backend != desc.backend
                || sibling.cipher != desc.cipher
            {
                return Err(CryptoError::InvalidParameter(format!(
                    "encryptor '{}' and '{}' disagree on backend or cipher spec",
                    desc.name, sibling_name
                )));
            }
        }
    }

    Ok(())
}
