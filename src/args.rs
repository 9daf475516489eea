use bal::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Where the operations are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Parses the input arguments, requiring exactly one: a path to the operations file, or `-` for stdin
pub fn parse_input_arg() -> Result<InputSource> {
    let mut args = env::args().skip(1);

    let arg = args.next().ok_or_else(|| {
        InputArgsError::Parse("First argument must be the operations file, or '-'.".to_string())
    })?;

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument: {extra}")))?
    }

    if arg == "-" {
        return Ok(InputSource::Stdin);
    }

    let path = fs::canonicalize(&arg).with_context(|| InputArgsError::FileNotFound(arg))?;

    Ok(InputSource::File(path))
}
