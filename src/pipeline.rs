// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Streaming pipeline: reads input files in fixed-size chunks, feeds them
//! through a [`Transform`], and writes output incrementally. Memory use is
//! bounded by the chunk size plus whatever the transform buffers internally
//! (at most a couple of cipher blocks), never by the input size.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CryptoError, Result};
use crate::provider::{self, CipherParams};
use crate::registry;

/// Read granularity for input files.
pub const CHUNK_SIZE: usize = 64 * 1024;

fn open_error(path: &Path, source: io::Error) -> CryptoError {
    if source.kind() == io::ErrorKind::NotFound {
        CryptoError::InputNotFound {
            path: path.to_path_buf(),
        }
    } else {
        CryptoError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Presents a list of files as one logical byte stream, read in
/// [`CHUNK_SIZE`] pieces. Files are opened lazily, one at a time.
pub struct ChunkReader {
    paths: std::vec::IntoIter<PathBuf>,
    current: Option<(PathBuf, File)>,
    buf: Vec<u8>,
}

impl ChunkReader {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths: paths.into_iter(),
            current: None,
            buf: vec![0u8; CHUNK_SIZE],
        }
    }

    /// Returns the next non-empty chunk, crossing file boundaries
    /// transparently, or `None` once every file is exhausted.
    pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        loop {
            let Some((path, file)) = self.current.as_mut() else {
                let Some(path) = self.paths.next() else {
                    return Ok(None);
                };
                let file = File::open(&path).map_err(|source| open_error(&path, source))?;
                debug!(path = %path.display(), "opened input file");
                self.current = Some((path, file));
                continue;
            };
            let n = file
                .read(&mut self.buf)
                .map_err(|source| CryptoError::InputUnreadable {
                    path: path.clone(),
                    source,
                })?;
            if n == 0 {
                self.current = None;
                continue;
            }
            return Ok(Some(&self.buf[..n]));
        }
    }
}

/// Runs the named algorithm over `inputs`, writing the transformed stream
/// to `out`. The algorithm is resolved and its adapter constructed before
/// any file is opened, so parameter errors surface without touching disk.
pub fn run(
    name: &str,
    inputs: &[PathBuf],
    params: Option<&CipherParams>,
    out: &mut dyn Write,
) -> Result<()> {
    let desc = registry::lookup(name)
        .ok_or_else(|| CryptoError::UnknownAlgorithm(name.to_string()))?;
    if inputs.is_empty() {
        return Err(CryptoError::InvalidParameter(
            "at least one input file is required".into(),
        ));
    }
    let mut transform = provider::create(desc, params)?;
    debug!(algorithm = name, files = inputs.len(), "starting transform");

    let mut reader = ChunkReader::new(inputs.to_vec());
    let mut staged = Vec::with_capacity(CHUNK_SIZE);
    while let Some(chunk) = reader.next_chunk()? {
        staged.clear();
        transform.update(chunk, &mut staged)?;
        out.write_all(&staged)?;
    }
    staged.clear();
    transform.finalize(&mut staged)?;
    out.write_all(&staged)?;
    out.flush()?;

    debug!(algorithm = name, "transform complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_chunk_reader_concatenates_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_temp(&dir, "a.bin", b"hello ");
        let b = write_temp(&dir, "b.bin", b"");
        let c = write_temp(&dir, "c.bin", b"world");

        let mut reader = ChunkReader::new(vec![a, b, c]);
        let mut collected = Vec::new();
        while let Some(chunk) = reader.next_chunk().unwrap() {
            collected.extend_from_slice(chunk);
        }
        assert_eq!(collected, b"hello world");
    }

    #[test]
    fn test_chunk_reader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut reader = ChunkReader::new(vec![dir.path().join("absent.bin")]);
        match reader.next_chunk() {
            Err(CryptoError::InputNotFound { path }) => {
                assert!(path.ends_with("absent.bin"));
            }
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_run_copy_multiple_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_temp(&dir, "a.txt", b"one ");
        let b = write_temp(&dir, "b.txt", b"two");
        let mut out = Vec::new();
        run("copy", &[a, b], None, &mut out).unwrap();
        assert_eq!(out, b"one two");
    }

    #[test]
    fn test_run_unknown_algorithm_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("never-opened.bin");
        let mut out = Vec::new();
        // Resolution fails first, so the missing file is never reported.
        match run("no-such-algorithm", &[missing], None, &mut out) {
            Err(CryptoError::UnknownAlgorithm(name)) => assert_eq!(name, "no-such-algorithm"),
            other => panic!("expected UnknownAlgorithm, got {other:?}"),
        }
    }

    #[test]
    fn test_run_rejects_empty_input_list() {
        let mut out = Vec::new();
        assert!(matches!(
            run("copy", &[], None, &mut out),
            Err(CryptoError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_run_rejects_nohash() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_temp(&dir, "in.bin", b"data");
        let mut out = Vec::new();
        assert!(matches!(
            run("nohash", &[input], None, &mut out),
            Err(CryptoError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_run_digest_matches_single_shot() {
        let dir = tempfile::tempdir().unwrap();
        // Larger than one chunk so the loop iterates more than once.
        let data = vec![0x61u8; CHUNK_SIZE + 17];
        let input = write_temp(&dir, "big.bin", &data);
        let mut out = Vec::new();
        run("rustcrypto-sha256", &[input], None, &mut out).unwrap();

        use sha2::{Digest, Sha256};
        let expected = Sha256::digest(&data);
        assert_eq!(out, expected.as_slice());
    }

    #[test]
    fn test_run_cipher_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let plain = write_temp(&dir, "plain.bin", b"pipeline round trip payload");
        let key = vec![0x33u8; 16];
        let iv = vec![0x44u8; 16];
        let params = CipherParams::new(key.clone(), Some(iv.clone()));

        let mut ciphertext = Vec::new();
        run(
            "rustcrypto-aes-128-cbc-encryptor",
            &[plain],
            Some(&params),
            &mut ciphertext,
        )
        .unwrap();

        let encrypted = write_temp(&dir, "enc.bin", &ciphertext);
        let mut decrypted = Vec::new();
        run(
            "rustcrypto-aes-128-cbc-decryptor",
            &[encrypted],
            Some(&params),
            &mut decrypted,
        )
        .unwrap();
        assert_eq!(decrypted, b"pipeline round trip payload");
    }
}
