// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crypt::provider::CipherParams;
use crypt::{pipeline, registry, ui};

#[derive(Parser, Debug)]
#[command(
    name = "crypt",
    version,
    about = "Stream files through cryptographic transforms"
)]
struct Cli {
    /// List every known algorithm name
    #[arg(long)]
    list: bool,

    /// Describe one algorithm instead of running it
    #[arg(long, value_name = "ALGORITHM", conflicts_with = "list")]
    explain: Option<String>,

    /// Cipher key as hex (encryptors and decryptors only)
    #[arg(long, value_name = "HEX")]
    key: Option<String>,

    /// Initialization vector as hex (CBC mode only)
    #[arg(long, value_name = "HEX")]
    iv: Option<String>,

    /// Algorithm to run
    algorithm: Option<String>,

    /// Input files, processed as one concatenated stream
    files: Vec<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_hex(label: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).with_context(|| format!("{label} is not valid hex"))
}

fn cipher_params(cli: &Cli) -> Result<Option<CipherParams>> {
    let Some(key) = cli.key.as_deref() else {
        if cli.iv.is_some() {
            bail!("--iv requires --key");
        }
        return Ok(None);
    };
    let key = parse_hex("--key", key)?;
    let iv = cli
        .iv
        .as_deref()
        .map(|iv| parse_hex("--iv", iv))
        .transpose()?;
    Ok(Some(CipherParams::new(key, iv)))
}

fn execute(cli: Cli) -> Result<()> {
    registry::verify_catalog()?;

    if cli.list {
        ui::write_list(&mut io::stdout().lock())?;
        return Ok(());
    }
    if let Some(name) = cli.explain.as_deref() {
        ui::write_details(name, &mut io::stdout().lock())?;
        return Ok(());
    }
    let Some(algorithm) = cli.algorithm.as_deref() else {
        let mut cmd = Cli::command();
        cmd.print_help().context("failed to print help")?;
        return Ok(());
    };

    let params = cipher_params(&cli)?;

    let mut stdout = io::stdout().lock();
    pipeline::run(algorithm, &cli.files, params.as_ref(), &mut stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("crypt: {err:#}");
            ExitCode::FAILURE
        }
    }
}
