//! Transcript sources. The whole input is read into memory before parsing.

use std::io::Read;
use std::path::Path;

use crate::assembler::{Assembler, Transcript};
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::normalizer::decode_lines;
use crate::types::SourceKind;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Read and decode all lines from `path`, or from standard input when the
/// path is `-`.
pub fn read_lines(path: &Path) -> Result<(Vec<String>, SourceKind), ParseError> {
    if path.as_os_str() == STDIN_PATH {
        let lines = read_from(std::io::stdin().lock(), path)?;
        return Ok((lines, SourceKind::Stdin));
    }

    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((decode_lines(&bytes)?, SourceKind::File))
}

/// Drain `reader` and decode its lines. `path` only labels I/O errors.
pub fn read_from<R: Read>(mut reader: R, path: &Path) -> Result<Vec<String>, ParseError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    decode_lines(&bytes)
}

/// Read `path` and parse it into a [`Transcript`].
pub fn read_transcript(path: &Path, config: &ParserConfig) -> Result<Transcript, ParseError> {
    let (lines, kind) = read_lines(path)?;
    tracing::info!(path = %path.display(), lines = lines.len(), "transcript read");
    Assembler::new(config).run(lines, kind)
}

/// Parse everything `reader` yields, labelled as `kind`.
pub fn parse_reader<R: Read>(
    reader: R,
    kind: SourceKind,
    config: &ParserConfig,
) -> Result<Transcript, ParseError> {
    let lines = read_from(reader, Path::new(STDIN_PATH))?;
    Assembler::new(config).run(lines, kind)
}
