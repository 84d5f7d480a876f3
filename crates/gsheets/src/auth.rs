//! Credential selection.
//!
//! Users can supply an OAuth access token directly, the location of a
//! service-account key file, or the key contents inline. Exactly one
//! source is picked here; exchanging it for a live token is the
//! transport layer's business.

use std::path::PathBuf;

use serde_json::Value as JsonValue;

/// Google API scopes requested for spreadsheet access.
pub const SCOPES: [&str; 3] = [
    "https://www.googleapis.com/auth/drive.readonly",
    "https://www.googleapis.com/auth/spreadsheets",
    "https://spreadsheets.google.com/feeds",
];

/// One of the mutually exclusive credential sources.
#[derive(Debug, Clone, PartialEq)]
pub enum Credentials {
    /// A ready-to-use OAuth access token.
    AccessToken(String),
    /// Path to a service-account key file.
    ServiceAccountFile {
        path: PathBuf,
        subject: Option<String>,
    },
    /// Inline service-account key contents.
    ServiceAccountInfo {
        info: JsonValue,
        subject: Option<String>,
    },
}

impl Credentials {
    /// The impersonation subject, when one applies.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        match self {
            Credentials::AccessToken(_) => None,
            Credentials::ServiceAccountFile { subject, .. }
            | Credentials::ServiceAccountInfo { subject, .. } => subject.as_deref(),
        }
    }

    /// The bearer token, when the source is a ready token.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        match self {
            Credentials::AccessToken(token) => Some(token),
            _ => None,
        }
    }
}

/// Pick a credential source, first match wins.
///
/// An access token beats a service-account file, which beats inline
/// service-account contents. The subject is forwarded only with a
/// service-account source, which can impersonate a user. No inputs at
/// all means no credentials; the transport treats that as
/// anonymous/public access.
#[must_use]
pub fn select_credentials(
    access_token: Option<String>,
    service_account_file: Option<PathBuf>,
    service_account_info: Option<JsonValue>,
    subject: Option<String>,
) -> Option<Credentials> {
    if let Some(token) = access_token {
        return Some(Credentials::AccessToken(token));
    }

    if let Some(path) = service_account_file {
        return Some(Credentials::ServiceAccountFile { path, subject });
    }

    if let Some(info) = service_account_info {
        return Some(Credentials::ServiceAccountInfo { info, subject });
    }

    None
}
