//! Synchronization modes.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{GSheetsError, Result};

/// When changes are pushed to the sheet and when it is re-downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Changes are pushed immediately; the sheet is re-downloaded before
    /// every update or delete.
    Bidirectional = 1,
    /// Changes are pushed immediately; the sheet is downloaded only once.
    Unidirectional = 2,
    /// Changes are pushed in a single batch when the connection closes.
    Batch = 3,
}

impl SyncMode {
    /// Numeric wire code for this mode.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Bidirectional),
            2 => Some(Self::Unidirectional),
            3 => Some(Self::Batch),
            _ => None,
        }
    }
}

impl FromStr for SyncMode {
    type Err = GSheetsError;

    /// Resolve a name-or-number token, case-insensitively.
    fn from_str(token: &str) -> Result<Self> {
        match token.to_uppercase().as_str() {
            "BIDIRECTIONAL" => Ok(Self::Bidirectional),
            "UNIDIRECTIONAL" => Ok(Self::Unidirectional),
            "BATCH" => Ok(Self::Batch),
            other => other
                .parse::<u8>()
                .ok()
                .and_then(Self::from_code)
                .ok_or_else(|| GSheetsError::InvalidSyncMode {
                    token: token.to_string(),
                }),
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bidirectional => write!(f, "bidirectional"),
            Self::Unidirectional => write!(f, "unidirectional"),
            Self::Batch => write!(f, "batch"),
        }
    }
}

/// Extract the synchronization mode from a sheet URL.
///
/// Users pick a mode by adding the `sync_mode` query argument by hand.
/// Names in any case and numeric codes are equivalent, so
/// `?sync_mode=BATCH`, `?sync_mode=batch`, and `?sync_mode=3` all
/// resolve to [`SyncMode::Batch`]. An absent argument means no
/// preference; an unrecognized token is a configuration error carrying
/// the raw value, never a default.
pub fn sync_mode_from_url(uri: &str) -> Result<Option<SyncMode>> {
    let parsed = Url::parse(uri).map_err(|_| GSheetsError::InvalidUrl {
        url: uri.to_string(),
    })?;

    // last value wins on repetition
    let token = parsed
        .query_pairs()
        .filter(|(key, _)| key == "sync_mode")
        .map(|(_, value)| value.into_owned())
        .last();

    token.map(|t| t.parse()).transpose()
}
