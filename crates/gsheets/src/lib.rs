//! Spreadsheet adapter plumbing for gridlink
//!
//! Bridges a relational, row-oriented model and a spreadsheet's sparse,
//! letter-addressed grid, and builds requests against the gviz
//! reporting endpoint. Everything here is pure and synchronous; network
//! transport lives in `gridlink-http`.
//!
//! # Examples
//!
//! ## Resolving the reporting endpoint
//!
//! ```
//! use gridlink_gsheets::gviz_url;
//!
//! let url = gviz_url(
//!     "https://docs.google.com/spreadsheets/d/abc123/edit#gid=7",
//!     0,
//!     0,
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     url.as_str(),
//!     "https://docs.google.com/spreadsheets/d/abc123/gviz/tq?gid=7"
//! );
//! ```
//!
//! ## Addressing columns
//!
//! ```
//! use gridlink_gsheets::{index_from_letters, letters_from_index};
//!
//! assert_eq!(letters_from_index(27), "AB");
//! assert_eq!(index_from_letters("AB").unwrap(), 27);
//! ```
//!
//! ## Picking a synchronization mode
//!
//! ```
//! use gridlink_gsheets::{sync_mode_from_url, SyncMode};
//!
//! let mode = sync_mode_from_url("https://x/y/d/ID/edit?sync_mode=batch").unwrap();
//! assert_eq!(mode, Some(SyncMode::Batch));
//! ```

mod auth;
mod cell;
mod endpoint;
mod error;
mod fields;
mod letters;
mod row;
mod sync;

/// Re-export credential selection.
pub use auth::{select_credentials, Credentials, SCOPES};
/// Re-export the raw cell value type.
pub use cell::CellValue;
/// Re-export the reporting-endpoint URL builder.
pub use endpoint::gviz_url;
/// Re-export adapter error types.
pub use error::{GSheetsError, Result};
/// Re-export typed column fields.
pub use fields::{ColumnKind, Field, FilterOp, Order};
/// Re-export the column letter codec.
pub use letters::{index_from_letters, letters, letters_from_index};
/// Re-export row materialization.
pub use row::values_from_row;
/// Re-export sync mode resolution.
pub use sync::{sync_mode_from_url, SyncMode};
