//! CSV export of query results
//!
//! Backs the result screen's download button. Header row is the column list
//! in result order; null cells become empty fields.

use crate::domain::error::{AppError, Result};
use crate::domain::query::QueryResult;

fn render_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn to_csv(result: &QueryResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(&result.columns)
        .map_err(|e| AppError::Internal(format!("Failed to write CSV header: {}", e)))?;

    for row in &result.rows {
        let record: Vec<String> = result
            .columns
            .iter()
            .map(|col| row.get(col).map(render_cell).unwrap_or_default())
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| AppError::Internal(format!("Failed to write CSV row: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV was not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn row(pairs: &[(&str, serde_json::Value)]) -> HashMap<String, serde_json::Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_header_only_for_empty_result() {
        let result = QueryResult {
            columns: vec!["id".to_string(), "name".to_string()],
            rows: vec![],
        };
        assert_eq!(to_csv(&result).unwrap(), "id,name\n");
    }

    #[test]
    fn test_scalar_rendering() {
        let result = QueryResult {
            columns: vec![
                "id".to_string(),
                "name".to_string(),
                "active".to_string(),
                "note".to_string(),
            ],
            rows: vec![row(&[
                ("id", json!(42)),
                ("name", json!("Acme")),
                ("active", json!(true)),
                ("note", json!(null)),
            ])],
        };
        assert_eq!(
            to_csv(&result).unwrap(),
            "id,name,active,note\n42,Acme,true,\n"
        );
    }

    #[test]
    fn test_values_with_commas_are_quoted() {
        let result = QueryResult {
            columns: vec!["name".to_string()],
            rows: vec![row(&[("name", json!("Doe, Jane"))])],
        };
        assert_eq!(to_csv(&result).unwrap(), "name\n\"Doe, Jane\"\n");
    }
}
