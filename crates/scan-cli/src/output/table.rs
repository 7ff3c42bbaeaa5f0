/// Minimum width of any column, header included.
const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

/// Render rows as a left-aligned text table with a dashed rule under the header.
///
/// Numbers are right-aligned. When `max_width` is set, the widest columns
/// shrink one character at a time and overflowing cells end in `…`.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let mut widths = column_widths(headers, rows);
    if let Some(limit) = max_width {
        shrink_to(&mut widths, headers, limit);
    }

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(title, &width)| pad(&clip(title, width), width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let rule = "-".repeat(header.chars().count());

    let mut out = vec![header, rule];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let clipped = clip(cell, width);
                let numeric = is_number(&clipped);
                pad(&clipped, width, numeric)
            })
            .collect::<Vec<_>>()
            .join(GAP);
        out.push(line.trim_end().to_string());
    }
    out.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN)
        })
        .collect()
}

fn shrink_to(widths: &mut [usize], headers: &[&str], limit: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > limit {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}
