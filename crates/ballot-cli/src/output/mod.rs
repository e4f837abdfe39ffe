use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_value_table(serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_value_table(value: Value, options: TableOptions) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let objects = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect::<Vec<_>>();
            render_object_rows(&objects, options)
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            render_table(&["value"], &rows, options)
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            render_table(&["field", "value"], &rows, options)
        }
        scalar => render_table(&["value"], &[vec![cell(&scalar)]], options),
    }
}

/// One row per object; columns are the union of their keys.
fn render_object_rows(objects: &[Map<String, Value>], options: TableOptions) -> String {
    let mut headers = Vec::<&str>::new();
    for key in objects.iter().flat_map(Map::keys) {
        if !headers.contains(&key.as_str()) {
            headers.push(key.as_str());
        }
    }
    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let rows = objects
        .iter()
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            format!("[{} items]", items.len())
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        status: &'static str,
        total_votes: u32,
    }

    #[test]
    fn json_render_is_pretty() {
        let row = Row {
            id: "e1",
            status: "active",
            total_votes: 7,
        };
        let out = render(&row, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["total_votes"], 7);
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line() {
        let row = Row {
            id: "e1",
            status: "active",
            total_votes: 7,
        };
        let out = render(&row, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_renders_as_field_value_pairs() {
        let row = Row {
            id: "e1",
            status: "active",
            total_votes: 7,
        };
        let out = render(&row, OutputFormat::Table).expect("table render should work");
        let first = out.lines().next().unwrap_or_default();
        assert!(first.contains("field") && first.contains("value"));
        assert!(out.contains("total_votes"));
    }

    #[test]
    fn array_of_objects_renders_one_row_each() {
        let rows = vec![
            Row {
                id: "e1",
                status: "draft",
                total_votes: 0,
            },
            Row {
                id: "e2",
                status: "ended",
                total_votes: 12,
            },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().unwrap_or_default();
        let id_at = header.find("id").unwrap_or(usize::MAX);
        let status_at = header.find("status").unwrap_or(usize::MAX);
        assert!(id_at < status_at);
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn empty_array_says_so() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(
            render(&rows, OutputFormat::Table).expect("render"),
            "(no rows)"
        );
    }

    #[test]
    fn nested_object_lists_are_summarized() {
        let value = serde_json::json!([{"title": "Council", "candidates": [{"name": "Ada"}, {"name": "Alan"}]}]);
        let out = render(&value, OutputFormat::Table).expect("render");
        assert!(out.contains("[2 items]"));
    }
}
