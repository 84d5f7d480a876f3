//! Typed fields backing sheet columns.
//!
//! The reporting endpoint describes each column with a kind token
//! ("string", "number", "boolean", "date", "datetime", "timeofday").
//! A [`Field`] carries the kind together with the filtering, ordering,
//! and exactness a column of that kind supports, and converts typed row
//! values into their unformatted wire form.
//!
//! Sheets store dates and times as serial numbers relative to the
//! Lotus 1-2-3 epoch (1899-12-30): dates are whole days, timestamps are
//! fractional days, times of day are fractions of one day.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use gridlink_core::Value;
use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::error::{GSheetsError, Result};

const SECONDS_1_DAY: f64 = 86_400.0;

fn lotus_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .expect("valid epoch date")
        .and_hms_opt(0, 0, 0)
        .expect("valid epoch time")
}

/// Column kind reported by the query-result schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    String,
    Number,
    Boolean,
    Date,
    DateTime,
    TimeOfDay,
}

impl ColumnKind {
    /// Kind name as it appears on the wire.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::TimeOfDay => "timeofday",
        }
    }
}

/// Filter operations a column supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact-match filtering.
    Equal,
    /// Range filtering (open or closed bounds).
    Range,
}

/// Sort orders a column can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    None,
    /// Any requested order can be served.
    Any,
    Ascending,
    Descending,
}

/// Typed field backing one sheet column.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub kind: ColumnKind,
    pub filters: Vec<FilterOp>,
    pub order: Order,
    pub exact: bool,
}

impl Field {
    /// Field for a reported column kind token.
    ///
    /// Unknown kinds fall back to a plain text field with equality-only
    /// filtering. String and boolean columns filter on equality; number,
    /// date, datetime, and timeofday columns filter on ranges. All
    /// columns serve any sort order with exact-match semantics.
    #[must_use]
    pub fn for_kind(kind: &str) -> Self {
        let (kind, filters) = match kind {
            "string" => (ColumnKind::String, vec![FilterOp::Equal]),
            "number" => (ColumnKind::Number, vec![FilterOp::Range]),
            "boolean" => (ColumnKind::Boolean, vec![FilterOp::Equal]),
            "date" => (ColumnKind::Date, vec![FilterOp::Range]),
            "datetime" => (ColumnKind::DateTime, vec![FilterOp::Range]),
            "timeofday" => (ColumnKind::TimeOfDay, vec![FilterOp::Range]),
            _ => (ColumnKind::String, vec![FilterOp::Equal]),
        };
        Field {
            kind,
            filters,
            order: Order::Any,
            exact: true,
        }
    }

    /// Convert a typed value to its unformatted wire form.
    ///
    /// A null value becomes the empty string (a blank cell);
    /// [`CellValue::Null`] is reserved for positions with no mapped
    /// field. A value whose type contradicts the field kind is a
    /// configuration error naming both types.
    pub fn unformatted(&self, value: &Value) -> Result<CellValue> {
        if value.is_null() {
            return Ok(CellValue::String(String::new()));
        }

        let converted = match self.kind {
            ColumnKind::String => value.as_str().map(|s| CellValue::String(s.to_string())),
            ColumnKind::Number => match value {
                Value::Int(i) => Some(CellValue::Int(*i)),
                Value::Float(f) => Some(CellValue::Float(*f)),
                _ => None,
            },
            ColumnKind::Boolean => value.as_bool().map(CellValue::Bool),
            ColumnKind::Date => value
                .as_date()
                .map(|d| CellValue::Int((d - lotus_epoch().date()).num_days())),
            ColumnKind::DateTime => value.as_datetime().map(|dt| {
                let elapsed = dt - lotus_epoch();
                let seconds =
                    elapsed.num_seconds() as f64 + f64::from(elapsed.subsec_nanos()) / 1e9;
                CellValue::Float(seconds / SECONDS_1_DAY)
            }),
            ColumnKind::TimeOfDay => value.as_time().map(|t| {
                let seconds =
                    f64::from(t.num_seconds_from_midnight()) + f64::from(t.nanosecond()) / 1e9;
                CellValue::Float(seconds / SECONDS_1_DAY)
            }),
        };

        converted.ok_or(GSheetsError::Type {
            expected: self.kind.name(),
            got: value.type_name(),
        })
    }
}
