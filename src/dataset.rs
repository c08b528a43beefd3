//! Row-oriented JSON input and output.
//!
//! Rows are JSON objects read from JSON-lines files (one object per line)
//! or from a file holding a single JSON array. Column names are
//! configurable; output rows use fixed Spanish column names.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::classification::{Classification, Comment};
use crate::error::{GlosaError, Result};

/// A dataset row.
pub type Row = Map<String, Value>;

pub const OUTPUT_ID: &str = "PNR";
pub const OUTPUT_COMMENT: &str = "Comentario";
pub const OUTPUT_CATEGORY: &str = "Categoría";
pub const OUTPUT_SUBCATEGORY: &str = "Subcategoría";
pub const OUTPUT_TYPE: &str = "Tipo";
pub const OUTPUT_CONFIDENCE: &str = "Confianza";

/// Input columns of the classification mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyColumns {
    pub id: String,
    pub comment: String,
}

impl Default for ClassifyColumns {
    fn default() -> Self {
        Self {
            id: "PNR".to_string(),
            comment: "comentarios".to_string(),
        }
    }
}

/// Input columns of the confidence mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreColumns {
    pub comment: String,
    pub category: String,
    #[serde(rename = "type")]
    pub type_: String,
}

impl Default for ScoreColumns {
    fn default() -> Self {
        Self {
            comment: OUTPUT_COMMENT.to_string(),
            category: OUTPUT_CATEGORY.to_string(),
            type_: OUTPUT_TYPE.to_string(),
        }
    }
}

/// Layout of an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    /// One compact JSON object per line.
    JsonLines,
    /// A single JSON array.
    JsonArray,
}

impl RowFormat {
    /// `.json` files hold an array, anything else is written as JSON lines.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RowFormat::JsonArray,
            _ => RowFormat::JsonLines,
        }
    }
}

/// Read every row of a JSON-lines or JSON array file.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        GlosaError::dataset(format!("Failed to open '{}': {}", path.display(), e))
    })?;
    let rows = parse_rows(BufReader::new(file))?;
    info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse rows from a reader holding JSON lines or a JSON array.
pub fn parse_rows<R: BufRead>(mut reader: R) -> Result<Vec<Row>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    if content.trim_start().starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(&content)
            .map_err(|e| GlosaError::dataset(format!("Invalid JSON array: {e}")))?;
        return values
            .into_iter()
            .enumerate()
            .map(|(i, value)| into_row(value, i + 1))
            .collect();
    }

    let mut rows = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|e| {
            GlosaError::dataset(format!("Invalid JSON on line {}: {}", line_num + 1, e))
        })?;
        rows.push(into_row(value, line_num + 1)?);
    }
    Ok(rows)
}

fn into_row(value: Value, position: usize) -> Result<Row> {
    match value {
        Value::Object(row) => Ok(row),
        other => Err(GlosaError::dataset(format!(
            "Row {} is not a JSON object: {}",
            position, other
        ))),
    }
}

/// Fail with [`GlosaError::MissingColumns`] when a column appears in no row.
///
/// An empty dataset has no missing columns.
pub fn require_columns(rows: &[Row], columns: &[&str]) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }
    let missing: Vec<&str> = columns
        .iter()
        .copied()
        .filter(|column| !rows.iter().any(|row| row.contains_key(*column)))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(GlosaError::missing_columns(missing))
    }
}

/// The text of a cell. Non-string and blank cells count as missing.
pub fn text_cell<'r>(row: &'r Row, column: &str) -> Option<&'r str> {
    row.get(column)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

/// Build labeled comments from confidence-mode rows.
pub fn comments_from_rows(rows: &[Row], columns: &ScoreColumns) -> Vec<Comment> {
    rows.iter()
        .map(|row| Comment {
            text: text_cell(row, &columns.comment).map(str::to_string),
            category: text_cell(row, &columns.category).map(|c| c.trim().to_string()),
            type_: text_cell(row, &columns.type_).map(|t| t.trim().to_string()),
        })
        .collect()
}

/// An output row of the classification mode.
pub fn classified_row(row: &Row, columns: &ClassifyColumns, result: &Classification) -> Row {
    let mut out = Row::new();
    out.insert(
        OUTPUT_ID.to_string(),
        row.get(&columns.id).cloned().unwrap_or(Value::Null),
    );
    out.insert(
        OUTPUT_COMMENT.to_string(),
        row.get(&columns.comment).cloned().unwrap_or(Value::Null),
    );
    out.insert(
        OUTPUT_CATEGORY.to_string(),
        Value::String(result.category.clone()),
    );
    out.insert(
        OUTPUT_SUBCATEGORY.to_string(),
        result.subcategory.clone().map_or(Value::Null, Value::String),
    );
    out.insert(
        OUTPUT_TYPE.to_string(),
        result.type_.clone().map_or(Value::Null, Value::String),
    );
    out
}

/// A confidence-mode row with its `Confianza` column set.
pub fn scored_row(row: &Row, confidence: f64) -> Row {
    let mut out = row.clone();
    out.insert(OUTPUT_CONFIDENCE.to_string(), Value::from(confidence));
    out
}

/// Write rows to `path`, or to standard output when `path` is `None`.
pub fn write_rows(path: Option<&Path>, rows: &[Row], format: RowFormat, pretty: bool) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                GlosaError::dataset(format!("Failed to create '{}': {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_rows_to(&mut writer, rows, format, pretty)?;
            writer.flush()?;
            debug!("Wrote {} rows to {}", rows.len(), path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_rows_to(&mut writer, rows, format, pretty)
        }
    }
}

/// Serialize rows into any writer.
pub fn write_rows_to<W: Write>(
    writer: &mut W,
    rows: &[Row],
    format: RowFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        RowFormat::JsonLines => {
            for row in rows {
                serde_json::to_writer(&mut *writer, row)?;
                writeln!(writer)?;
            }
        }
        RowFormat::JsonArray => {
            if pretty {
                serde_json::to_writer_pretty(&mut *writer, rows)?;
            } else {
                serde_json::to_writer(&mut *writer, rows)?;
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_parse_json_lines() {
        let input = "{\"PNR\": \"A1\", \"comentarios\": \"hola\"}\n\n{\"PNR\": \"B2\"}\n";
        let rows = parse_rows(input.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["PNR"], json!("B2"));
    }

    #[test]
    fn test_parse_json_array() {
        let input = r#"  [{"PNR": "A1"}, {"PNR": "B2"}]"#;
        let rows = parse_rows(input.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        let err = parse_rows("{\"a\": 1}\n42\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 2"));
        let err = parse_rows("{\"a\": \n".as_bytes()).unwrap_err();
        assert!(matches!(err, GlosaError::Dataset(_)));
    }

    #[test]
    fn test_require_columns() {
        let rows = vec![row(json!({"PNR": "A1"})), row(json!({"comentarios": "hola"}))];
        assert!(require_columns(&rows, &["PNR", "comentarios"]).is_ok());

        let err = require_columns(&rows, &["PNR", "Categoría", "Tipo"]).unwrap_err();
        match err {
            GlosaError::MissingColumns { columns } => {
                assert_eq!(columns, vec!["Categoría", "Tipo"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(require_columns(&[], &["PNR"]).is_ok());
    }

    #[test]
    fn test_comments_from_rows() {
        let rows = vec![
            row(json!({"Comentario": "maleta rota", "Categoría": " Equipaje ", "Tipo": "Daño"})),
            row(json!({"Comentario": 12, "Categoría": "", "Tipo": null})),
        ];
        let comments = comments_from_rows(&rows, &ScoreColumns::default());
        assert_eq!(
            comments[0],
            Comment::labeled("maleta rota", "Equipaje", "Daño")
        );
        assert_eq!(comments[1], Comment::default());
    }

    #[test]
    fn test_classified_row() {
        let input = row(json!({"PNR": "XYZ", "comentarios": "mi maleta", "extra": 1}));
        let result = Classification {
            category: "Equipaje".to_string(),
            subcategory: None,
            type_: Some("Daño".to_string()),
        };
        let out = classified_row(&input, &ClassifyColumns::default(), &result);
        assert_eq!(
            Value::Object(out),
            json!({
                "PNR": "XYZ",
                "Comentario": "mi maleta",
                "Categoría": "Equipaje",
                "Subcategoría": null,
                "Tipo": "Daño"
            })
        );
    }

    #[test]
    fn test_write_formats() {
        let rows = vec![row(json!({"a": 1})), row(json!({"a": 2}))];

        let mut lines = Vec::new();
        write_rows_to(&mut lines, &rows, RowFormat::JsonLines, false).unwrap();
        assert_eq!(String::from_utf8(lines).unwrap(), "{\"a\":1}\n{\"a\":2}\n");

        let mut array = Vec::new();
        write_rows_to(&mut array, &rows, RowFormat::JsonArray, false).unwrap();
        assert_eq!(String::from_utf8(array).unwrap(), "[{\"a\":1},{\"a\":2}]\n");
    }

    #[test]
    fn test_row_format_for_path() {
        assert_eq!(RowFormat::for_path(Path::new("out.json")), RowFormat::JsonArray);
        assert_eq!(RowFormat::for_path(Path::new("out.jsonl")), RowFormat::JsonLines);
        assert_eq!(RowFormat::for_path(Path::new("out")), RowFormat::JsonLines);
    }
}
