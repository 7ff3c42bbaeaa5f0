use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print a list response.
///
/// JSON formats get the whole envelope; tables get only the rows, since
/// nested arrays do not fit in a cell.
pub fn output_list<T: Serialize, R: Serialize>(
    envelope: &T,
    rows: &[R],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => output(&rows, format),
        OutputFormat::Json | OutputFormat::Raw => output(envelope, format),
    }
}

fn render_table(value: &Value) -> anyhow::Result<String> {
    let width = ui::prefs().term_width;
    match value {
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let headers = object_headers(items);
            let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|h| map.get(h).map_or_else(|| String::from("-"), cell))
                        .collect::<Vec<String>>()
                })
                .collect::<Vec<_>>();
            Ok(table::render_rows(&header_refs, &rows, width))
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            Ok(table::render_rows(&["value"], &rows, width))
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_rows(&["key", "value"], &rows, width))
        }
        scalar => Ok(cell(scalar)),
    }
}

/// Union of keys across all rows.
fn object_headers(items: &[Value]) -> Vec<String> {
    let mut headers = Vec::<String>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }
    headers
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Number(number) => number
            .as_f64()
            .filter(|_| number.is_f64())
            .map_or_else(|| number.to_string(), |f| format!("{f:.1}")),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scan_core::{CandidateSource, RankedCandidate};

    use super::render;
    use crate::cli::OutputFormat;

    fn candidate() -> RankedCandidate {
        RankedCandidate {
            index: 0,
            name: "Common Cold".to_string(),
            score: 63.714,
            source: CandidateSource::SymptomDescription,
            symptoms: vec!["runny nose".to_string(), "coughing".to_string()],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&candidate(), OutputFormat::Json).expect("json render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["name"], "Common Cold");
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&candidate(), OutputFormat::Raw).expect("raw render");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["index"], 0);
    }

    #[test]
    fn table_has_a_column_per_field() {
        let out = render(&vec![candidate()], OutputFormat::Table).expect("table render");
        let header = out.lines().next().expect("header");
        let positions: Vec<usize> = ["index", "name", "score", "source", "symptoms"]
            .iter()
            .map(|h| header.find(h).expect("column present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{header}");
        assert!(out.contains("63.7"));
        assert!(out.contains("runny nose, coughing"));
    }

    #[test]
    fn empty_list_says_so() {
        let rows: Vec<RankedCandidate> = Vec::new();
        assert_eq!(render(&rows, OutputFormat::Table).expect("table"), "(no rows)");
    }
}
