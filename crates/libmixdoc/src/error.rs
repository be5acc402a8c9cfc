use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting from sources or rendering documents.
#[derive(Error, Debug)]
pub enum MixdocError {
    /// A `CMD_*` name that is not a known command.
    #[error("Unknown command identifier: CMD_{0}")]
    UnknownCommand(String),

    /// A `SET_VIEW_MODE` argument that is not a `VIEW_MODE_*` constant.
    #[error("Unknown view mode argument: {0}")]
    UnknownViewMode(String),

    /// A parametrized command used without an argument.
    #[error("Command CMD_{0} requires an argument")]
    MissingArgument(String),

    /// An argument that is not a number below 512.
    #[error("Invalid argument for command CMD_{command}: {argument}")]
    InvalidArgument { command: String, argument: String },

    /// An assignment referencing an undeclared color pair.
    #[error("Color pair {index} for element {element} is out of range ({defined} pairs defined)")]
    ColorPairOutOfRange {
        element: String,
        index: String,
        defined: usize,
    },

    /// An attribute constant outside the known set.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A setting override naming no known option.
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// A source path that does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// An I/O error while reading a source.
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    /// Another error, located at a line of a source file.
    #[error("{}:{line}: {source}", .path.display())]
    AtLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<MixdocError>,
    },
}

impl MixdocError {
    /// Wrap an extraction error with the source location it was raised at.
    pub fn at_line(self, path: impl Into<PathBuf>, line: usize) -> Self {
        Self::AtLine {
            path: path.into(),
            line,
            source: Box::new(self),
        }
    }

    /// The innermost error, with any location wrappers removed.
    pub fn root(&self) -> &Self {
        match self {
            Self::AtLine { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, MixdocError>;
