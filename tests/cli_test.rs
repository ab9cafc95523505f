// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Command Line Surface Tests
//!
//! Spawns the built binary and checks the observable contract: listing
//! format, help behavior, exit codes and the stderr discipline.

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use std::process::{Command, Output};

    fn crypt(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_crypt"))
            .args(args)
            .output()
            .unwrap()
    }

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_list_format_and_exit_code() {
        let output = crypt(&["--list"]);
        assert!(output.status.success());
        assert!(output.stderr.is_empty());

        let text = String::from_utf8(output.stdout).unwrap();
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 44);
        for line in &lines {
            assert!(line.starts_with("  "), "{line:?}");
            assert!(!line[2..].starts_with(' '), "{line:?}");
        }
        let names: Vec<&str> = lines.iter().map(|l| &l[2..]).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"copy"));
        assert!(names.contains(&"nohash"));
        assert!(names.contains(&"rustcrypto-aes-128-cbc-encryptor"));
        assert!(names.contains(&"openssl-sha256"));
    }

    #[test]
    fn test_no_arguments_prints_help() {
        let output = crypt(&[]);
        assert!(output.status.success());
        assert!(!output.stdout.is_empty());
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_explain_known_algorithm() {
        let output = crypt(&["--explain", "rustcrypto-sha256"]);
        assert!(output.status.success());
        assert!(output.stderr.is_empty());
        let text = String::from_utf8(output.stdout).unwrap();
        assert!(text.starts_with("rustcrypto-sha256\n"));
    }

    #[test]
    fn test_unknown_algorithm_exit_code_and_diagnostic() {
        let output = crypt(&["whirlpool", "some-file"]);
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("Unknown algorithm: 'whirlpool'"), "{stderr:?}");
        assert_eq!(stderr.trim_end().lines().count(), 1);
    }

    #[test]
    fn test_missing_input_fails_nonzero() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.bin");
        let output = crypt(&["copy", missing.to_str().unwrap()]);
        assert!(!output.status.success());
        assert!(!output.stderr.is_empty());
    }

    #[test]
    fn test_digest_run_success_keeps_stderr_empty() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_temp(&dir, "hello.txt", b"hello world");
        let output = crypt(&["rustcrypto-sha256", input.to_str().unwrap()]);
        assert!(output.status.success());
        assert!(output.stderr.is_empty());
        assert_eq!(
            hex::encode(&output.stdout),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_cipher_run_via_key_and_iv_options() {
        let dir = tempfile::tempdir().unwrap();
        let plain = write_temp(&dir, "plain.bin", b"option parsing end to end");
        let key = "000102030405060708090a0b0c0d0e0f";
        let iv = "0f0e0d0c0b0a09080706050403020100";

        let enc = crypt(&[
            "rustcrypto-aes-128-cbc-encryptor",
            "--key",
            key,
            "--iv",
            iv,
            plain.to_str().unwrap(),
        ]);
        assert!(enc.status.success());
        assert!(enc.stderr.is_empty());
        assert_eq!(enc.stdout.len() % 16, 0);

        let cipher_path = write_temp(&dir, "enc.bin", &enc.stdout);
        let dec = crypt(&[
            "rustcrypto-aes-128-cbc-decryptor",
            "--key",
            key,
            "--iv",
            iv,
            cipher_path.to_str().unwrap(),
        ]);
        assert!(dec.status.success());
        assert_eq!(dec.stdout, b"option parsing end to end");
    }

    #[test]
    fn test_bad_hex_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_temp(&dir, "in.bin", b"data");
        let output = crypt(&[
            "rustcrypto-aes-128-cbc-encryptor",
            "--key",
            "not-hex",
            input.to_str().unwrap(),
        ]);
        assert!(!output.status.success());
        assert!(!output.stderr.is_empty());
    }
}
