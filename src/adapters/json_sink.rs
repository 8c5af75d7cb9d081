use crate::domain::model::Document;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Renders the document as a JSON array of objects.
///
/// `indent` spaces per nesting level; `0` produces compact output.
/// Non-ASCII text is written as-is.
pub fn render_document(document: &Document, indent: usize) -> Result<Vec<u8>> {
    if indent == 0 {
        return Ok(serde_json::to_vec(document)?);
    }

    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    document.serialize(&mut serializer)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialect::Dialect;
    use crate::domain::model::{Row, SourceTable};

    fn document(columns: &[&str], rows: &[&[&str]]) -> Document {
        let table = SourceTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, values)| Row {
                    line: i as u64 + 2,
                    values: values.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
        };
        Document::from_table(&table, &Dialect::default()).unwrap()
    }

    #[test]
    fn test_four_space_indent() {
        let doc = document(&["name", "age"], &[&["Alice", "30"], &["Bob", ""]]);
        let rendered = String::from_utf8(render_document(&doc, 4).unwrap()).unwrap();

        let expected = r#"[
    {
        "name": "Alice",
        "age": "30"
    },
    {
        "name": "Bob",
        "age": ""
    }
]"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_compact_output() {
        let doc = document(&["name", "age"], &[&["Alice", "30"], &["Bob", ""]]);
        let rendered = String::from_utf8(render_document(&doc, 0).unwrap()).unwrap();
        assert_eq!(
            rendered,
            r#"[{"name":"Alice","age":"30"},{"name":"Bob","age":""}]"#
        );
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let doc = document(&["greeting"], &[&["ยินดีต้อนรับ"]]);
        let rendered = String::from_utf8(render_document(&doc, 2).unwrap()).unwrap();

        assert!(rendered.contains("ยินดีต้อนรับ"));
        assert!(!rendered.contains("\\u"));
    }

    #[test]
    fn test_numbers_stay_text() {
        let doc = document(&["n", "flag"], &[&["42", "true"]]);
        let value: serde_json::Value =
            serde_json::from_slice(&render_document(&doc, 2).unwrap()).unwrap();
        assert_eq!(value[0]["n"], serde_json::json!("42"));
        assert_eq!(value[0]["flag"], serde_json::json!("true"));
    }

    #[test]
    fn test_empty_document() {
        let doc = document(&["a"], &[]);
        assert_eq!(render_document(&doc, 4).unwrap(), b"[]");
    }
}
