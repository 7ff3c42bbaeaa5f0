//! Parsing the advisor's ranked-disease table.
//!
//! The model is asked to echo matching rows of the disease CSV with an extra
//! `row_index` column, or to answer `FALSE`. Replies are often wrapped in a
//! markdown code fence, which is stripped before parsing.

use crate::error::AdvisorError;

pub const ROW_INDEX_COLUMN: &str = "row_index";
const DECLINE_TOKEN: &str = "FALSE";

/// Extract the catalog row indices from a ranking reply, best first.
///
/// Duplicate indices are dropped, keeping the first occurrence. At most
/// `limit` indices are returned.
///
/// # Errors
///
/// - [`AdvisorError::Declined`] when the reply is the decline token.
/// - [`AdvisorError::Malformed`] when there is no `row_index` column or no
///   row carries a usable index.
pub fn parse_row_indices(reply: &str, limit: usize) -> Result<Vec<usize>, AdvisorError> {
    let body = strip_code_fence(reply);
    if body.trim().trim_matches('.').eq_ignore_ascii_case(DECLINE_TOKEN) {
        return Err(AdvisorError::Declined);
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AdvisorError::Malformed(format!("unreadable header: {e}")))?;
    let column = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(ROW_INDEX_COLUMN))
        .ok_or_else(|| AdvisorError::Malformed(format!("no {ROW_INDEX_COLUMN} column")))?;

    let mut indices = Vec::new();
    for record in reader.records() {
        let Ok(record) = record else {
            tracing::debug!("skipping unreadable advisor row");
            continue;
        };
        let Some(index) = record.get(column).and_then(parse_index) else {
            continue;
        };
        if !indices.contains(&index) {
            indices.push(index);
        }
        if indices.len() == limit {
            break;
        }
    }

    if indices.is_empty() {
        return Err(AdvisorError::Malformed("no row carries a row_index".into()));
    }
    Ok(indices)
}

/// Accepts `3` and the float rendering `3.0`.
fn parse_index(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    raw.parse::<usize>()
        .ok()
        .or_else(|| raw.strip_suffix(".0").and_then(|s| s.parse().ok()))
}

fn strip_code_fence(reply: &str) -> String {
    reply
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}
