//! Reading records and writing normalized output

use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use error_stack::Report;
use tracing::debug;

use crate::error::Error;
use crate::error::Result;

/// Where input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Standard input, read to the end
    Stdin,
}

impl InputSource {
    /// File when a path is given, else standard input
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdin, Self::File)
    }

    /// Read the whole input as UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] when the source cannot be read.
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Self::File(path) => {
                debug!("Reading input from {}", path.display());
                std::fs::read_to_string(path).map_err(|e| {
                    Report::new(Error::failed_to_read("input file", &e))
                        .attach(format!("Path: {}", path.display()))
                })
            },
            Self::Stdin => {
                debug!("Reading input from stdin");
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| Report::new(Error::failed_to_read("standard input", e)))?;
                Ok(text)
            },
        }
    }
}

/// Where output text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A file on disk, created or truncated
    File(PathBuf),
    /// Standard output
    Stdout,
}

impl OutputTarget {
    /// File when a path is given, else standard output
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Write `text`; standard output gets a trailing newline
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] when the destination cannot be written.
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            Self::File(path) => write_file(path, text),
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{text}")
                    .and_then(|()| stdout.flush())
                    .map_err(|e| Report::new(Error::failed_to_write("standard output", e)))
            },
        }
    }
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    debug!("Writing output to {}", path.display());
    std::fs::write(path, text).map_err(|e| {
        Report::new(Error::failed_to_write("output file", &e))
            .attach(format!("Path: {}", path.display()))
    })
}
