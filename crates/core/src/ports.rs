use crate::domain::MatchRecord;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy shared by every port.
#[derive(Debug)]
pub enum Error {
    /// An input resource could not be read, or an output destination written.
    Io(io::Error),
    /// A raw row did not map into a typed record. `line` is the 1-based
    /// source line, filled in by the reader once it is known.
    Decode { line: Option<u64>, message: String },
    /// Invalid wiring input supplied by the caller.
    Config(String),
}

impl Error {
    /// A decode failure whose source line is not yet known.
    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode {
            line: None,
            message: message.into(),
        }
    }

    /// Pins a decode failure to a source line; other variants pass through.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            Error::Decode {
                line: None,
                message,
            } => Error::Decode {
                line: Some(line),
                message,
            },
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Decode {
                line: Some(line),
                message,
            } => write!(f, "decode error on line {}: {}", line, message),
            Error::Decode {
                line: None,
                message,
            } => write!(f, "decode error: {}", message),
            Error::Config(message) => write!(f, "configuration error: {}", message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Maps one raw row of text fields to a typed record.
///
/// This is the single customizable step of the tabular reader; the loading
/// and splitting algorithm around it is fixed.
pub trait RowDecoder {
    fn decode(&self, fields: &[&str]) -> Result<MatchRecord>;
}

/// Computes a textual summary from a sequence of match records.
pub trait Analyzer {
    fn run(&self, records: &[MatchRecord]) -> String;
}

/// Trait for rendering a summary to an output destination.
/// This is a port (interface) that defines how the core communicates with output adapters.
pub trait ReportWriter: Send + Sync {
    fn print(&self, summary: &str) -> Result<()>;
}
