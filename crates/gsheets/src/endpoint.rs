//! Reporting-endpoint URL building.
//!
//! A spreadsheet URL as pasted by a user looks like
//! `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0`, possibly
//! with `headers`, `gid`, `sheet`, or `sync_mode` query arguments. The
//! read/query endpoint lives under `<id>/gviz/tq` and takes a rebuilt
//! query string.

use url::Url;

use crate::error::{GSheetsError, Result};

/// Path suffix of the reporting endpoint.
const GVIZ_ENDPOINT: &str = "gviz/tq";

/// Build the reporting-endpoint URL for a spreadsheet URL.
///
/// `headers`, `gid`, and `sheet` are defaults; matching query arguments
/// in the URL override them (last value wins on repetition), and a
/// `#gid=<n>` fragment overrides the gid with priority over the query
/// string. The result carries `headers` only when the resolved count is
/// positive, and exactly one of `sheet` (when a sheet name is known) or
/// `gid` (otherwise, even when zero).
pub fn gviz_url(uri: &str, headers: u32, gid: u64, sheet: Option<&str>) -> Result<Url> {
    let parsed = Url::parse(uri).map_err(|_| GSheetsError::InvalidUrl {
        url: uri.to_string(),
    })?;

    let mut headers = headers;
    let mut gid = gid;
    let mut sheet = sheet.map(str::to_string);

    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "headers" => headers = parse_override("headers", &value)?,
            "gid" => gid = parse_override("gid", &value)?,
            "sheet" => sheet = Some(value.into_owned()),
            _ => {}
        }
    }

    // fragment wins over the query string
    if let Some(raw) = parsed.fragment().and_then(|f| f.strip_prefix("gid=")) {
        gid = parse_override("gid", raw)?;
    }

    let path = parsed.path();
    let path = path.strip_suffix("/edit").unwrap_or(path);
    let path = format!("{}/{}", path.trim_end_matches('/'), GVIZ_ENDPOINT);

    let mut endpoint = parsed.clone();
    endpoint.set_path(&path);
    endpoint.set_fragment(None);
    endpoint.set_query(None);
    {
        let mut pairs = endpoint.query_pairs_mut();
        if headers > 0 {
            pairs.append_pair("headers", &headers.to_string());
        }
        match &sheet {
            Some(name) => {
                pairs.append_pair("sheet", name);
            }
            None => {
                pairs.append_pair("gid", &gid.to_string());
            }
        }
    }

    tracing::debug!(endpoint = %endpoint, "resolved reporting endpoint");
    Ok(endpoint)
}

fn parse_override<T: std::str::FromStr>(param: &'static str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| GSheetsError::InvalidParameter {
            param,
            value: value.to_string(),
        })
}
