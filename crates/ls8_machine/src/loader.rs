//! Program image loader.
//!
//! An image is a text file with one instruction or data byte per line,
//! written as a base-2 literal. Anything after `#` is a comment and blank
//! lines are skipped:
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{LoadError, MEMORY_SIZE};

const COMMENT_MARKER: char = '#';

/// Parse a program image into the bytes to place at address 0.
pub fn parse_program<R: BufRead>(reader: R) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = match line.split_once(COMMENT_MARKER) {
            Some((code, _comment)) => code,
            None => line.as_str(),
        }
        .trim();

        if text.is_empty() {
            continue;
        }

        let byte = u8::from_str_radix(text, 2).map_err(|_| LoadError::InvalidLiteral {
            line: index + 1,
            text: text.to_string(),
        })?;
        program.push(byte);
        if program.len() > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge { len: program.len() });
        }
    }

    Ok(program)
}

/// Read and parse the program image at `path`.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(BufReader::new(file))?;
    log::info!("Loaded {} bytes from '{}'", program.len(), path.display());
    Ok(program)
}
