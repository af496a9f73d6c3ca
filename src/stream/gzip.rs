//! Streaming file-to-file gzip compression.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::error::{HandlerError, HandlerResult};

/// Byte counts of a finished compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GzipStats {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

/// Compresses `input` into `output`, replacing any existing file there.
///
/// The work runs on the blocking pool. Input is piped through the encoder
/// in buffer-sized pieces, never loaded whole. Success is only reported once
/// the encoder trailer is written and the file is synced; on any failure
/// after the output was created, the partial output is removed.
pub async fn gzip_file(input: PathBuf, output: PathBuf) -> HandlerResult<GzipStats> {
    tokio::task::spawn_blocking(move || gzip_file_blocking(&input, &output)).await?
}

pub fn gzip_file_blocking(input: &Path, output: &Path) -> HandlerResult<GzipStats> {
    let mut reader = File::open(input)
        .map(BufReader::new)
        .map_err(|e| HandlerError::io("open", input, e))?;

    let file = File::create(output).map_err(|e| HandlerError::io("create", output, e))?;

    let result = pipe(&mut reader, file, input, output);
    if result.is_err() {
        if let Err(e) = std::fs::remove_file(output) {
            tracing::warn!(path = %output.display(), error = %e, "Could not remove partial archive");
        }
    }
    result
}

fn pipe(
    reader: &mut BufReader<File>,
    file: File,
    input: &Path,
    output: &Path,
) -> HandlerResult<GzipStats> {
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());

    let bytes_in =
        io::copy(reader, &mut encoder).map_err(|e| HandlerError::io("pipe", input, e))?;

    let mut writer = encoder
        .finish()
        .map_err(|e| HandlerError::io("finish", output, e))?;
    writer
        .flush()
        .map_err(|e| HandlerError::io("flush", output, e))?;

    let file = writer
        .into_inner()
        .map_err(|e| HandlerError::io("flush", output, e.into_error()))?;
    file.sync_all()
        .map_err(|e| HandlerError::io("sync", output, e))?;

    let bytes_out = file
        .metadata()
        .map_err(|e| HandlerError::io("stat", output, e))?
        .len();

    Ok(GzipStats {
        bytes_in,
        bytes_out,
    })
}
