// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Streaming file transform library behind the `crypt` command line tool.
//!
//! A static catalog ([`registry`]) names every supported algorithm and maps
//! each one to a backend ([`provider`]): AES-CBC/ECB ciphers and a family of
//! digests, implemented once over the pure Rust crypto crates and once over
//! OpenSSL. The [`pipeline`] module streams any number of input files
//! through the selected transform in bounded memory.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! let mut out = Vec::new();
//! crypt::pipeline::run("rustcrypto-sha256", &[PathBuf::from("data.bin")], None, &mut out)?;
//! println!("{}", hex::encode(&out));
//! # Ok::<(), crypt::CryptoError>(())
//! ```

pub mod error;
pub mod pipeline;
pub mod provider;
pub mod registry;
pub mod types;
pub mod ui;

pub use error::{CryptoError, Result};
pub use provider::{CipherParams, Transform};
pub use types::{Backend, BlockMode, CipherSpec, Descriptor, Family, HashFunction};
