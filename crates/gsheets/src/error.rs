use thiserror::Error;

/// Errors that can occur while adapting rows and URLs for a spreadsheet.
///
/// All variants are configuration errors caused by caller input; the raw
/// offending value is carried verbatim.
#[derive(Error, Debug)]
pub enum GSheetsError {
    #[error("Invalid column label: {label}")]
    InvalidColumnLabel { label: String },

    #[error("Column map is empty")]
    EmptyColumnMap,

    #[error("Duplicate column letter {letter}: maps both {first} and {second}")]
    DuplicateColumnLetter {
        letter: String,
        first: String,
        second: String,
    },

    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("Invalid value for {param}: {value}")]
    InvalidParameter { param: &'static str, value: String },

    #[error("Invalid sync mode: {token}")]
    InvalidSyncMode { token: String },

    #[error("Type error: expected {expected}, got {got}")]
    Type {
        expected: &'static str,
        got: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, GSheetsError>;
