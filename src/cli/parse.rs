//! Parse command implementation.
//!
//! Prints one parsed document as JSON on stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::discovery::load_document;
use crate::error::{PmapError, Result};
use crate::render::render_json;

/// Print a parsed document as JSON
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Document to parse
    pub file: PathBuf,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let loaded = load_document(&args.file)?;
    let json = render_json(&loaded.data)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).map_err(|e| PmapError::Io {
        path: args.file.clone(),
        message: format!("Failed to write to stdout: {}", e),
    })?;

    Ok(())
}
