//! Plain-text table layout for `--format table`.

const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render headers and string rows as an aligned table.
///
/// Missing cells render as `-`. When `max_width` is set, the widest columns
/// are shrunk first and their cells are truncated with `…`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = natural_widths(headers, rows);
    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let raw = row.get(index).map_or("-", String::as_str);
                let text = truncate(raw, *width);
                let padded = pad(&text, *width, is_numeric(&text));
                if options.color {
                    colorize(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(SEPARATOR).trim_end().to_string());
    }
    lines.join("\n")
}

fn natural_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect()
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit()) && value.parse::<f64>().is_ok()
}

/// Wrap a padded cell in an ANSI color chosen by its unpadded text.
fn colorize(text: &str, padded: String) -> String {
    let code = match text {
        "true" | "active" | "open" | "results_published" | "authenticated" | "ok" => "32",
        "draft" | "not_started" | "loading" | "warning" => "33",
        "false" | "ended" | "closed" | "anonymous" | "failed" | "error" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TableOptions {
        TableOptions::default()
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            vec!["e1".to_string(), "draft".to_string()],
            vec!["e200".to_string(), "results_published".to_string()],
        ];
        let table = render_table(&["id", "status"], &rows, plain());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id    status"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[3], "e200  results_published");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["only".to_string()]];
        let table = render_table(&["a", "b"], &rows, plain());
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with('-')));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![vec!["7".to_string()], vec!["1200".to_string()]];
        let table = render_table(&["votes"], &rows, plain());
        assert_eq!(table.lines().nth(2), Some("    7"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "e1".to_string(),
            "A rather long election description".to_string(),
        ]];
        let options = TableOptions {
            max_width: Some(24),
            color: false,
        };
        let table = render_table(&["id", "description"], &rows, options);
        let row = table.lines().nth(2).unwrap_or_default();
        assert!(row.ends_with('…'));
        assert!(row.chars().count() <= 24);
    }

    #[test]
    fn status_cells_are_colored() {
        let rows = vec![vec!["active".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_table(&["status"], &rows, options);
        assert!(table.contains("\u{1b}[32mactive"));
    }
}
