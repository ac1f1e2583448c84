use mdhash::HashAlgorithm;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const CHUNK_SIZE: usize = 8 * 1024;

/// Print message digests of files, in the style of `sha256sum`.
#[derive(Debug, Parser)]
struct Cli {
    /// Digest algorithm: md5, sha1, sha224, sha256, sha384 or sha512.
    #[arg(short, long, default_value = "sha256")]
    algorithm: HashAlgorithm,
    /// Files to hash. Reads standard input when empty or "-".
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let files = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files
    };

    let mut status = ExitCode::SUCCESS;
    for path in &files {
        match hash_path(cli.algorithm, path) {
            Ok(digest) => println!("{}  {}", hex::encode(digest), path.display()),
            Err(err) => {
                eprintln!("hashsum: {err:#}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}

fn hash_path(algorithm: HashAlgorithm, path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        return hash_reader(algorithm, io::stdin().lock()).context("reading standard input");
    }
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    hash_reader(algorithm, file).with_context(|| format!("reading {}", path.display()))
}

fn hash_reader(algorithm: HashAlgorithm, mut reader: impl Read) -> io::Result<Vec<u8>> {
    let mut hasher = algorithm.hasher();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut total = 0usize;
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        hasher.update(&buffer[..n]);
        total += n;
    }
    debug!(%algorithm, total, "hashed input");
    Ok(hasher.finalize())
}
