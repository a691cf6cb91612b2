//! Placeholder detection and substitution for generated SQL
//!
//! Generated SQL arrives from the LLM collaborator with brace-delimited
//! placeholders such as `{customer_id}`. This module handles:
//! - Token extraction in first-seen order, duplicates collapsed
//! - Substitution of filled tokens, leaving unfilled ones verbatim
//! - The completeness gate that blocks execution while values are missing
//! - Name-based classification used to pick an input widget per token
//!
//! Templates come from a trusted generation collaborator, so malformed brace
//! sequences are silently ignored rather than rejected. Token names are
//! case-sensitive: `{ID}` and `{id}` are distinct tokens. An empty name
//! (`{}`) is never extracted.

use crate::domain::template::{TokenKind, TokenSpec};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// A token is a brace pair enclosing at least one non-brace character.
/// A dangling `{` with no matching `}` simply never matches.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Collect unique token names from a template, preserving the position of
/// each name's first occurrence. The input is never mutated.
pub fn extract_tokens(template: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for caps in TOKEN_PATTERN.captures_iter(template) {
        let name = &caps[1];
        if !tokens.iter().any(|t| t == name) {
            tokens.push(name.to_string());
        }
    }
    tokens
}

/// Substitute every token that has an entry in `values`, all occurrences.
///
/// Single left-to-right pass over the original template: replacement text is
/// never re-scanned, so a value containing `{other}` is emitted literally.
/// Tokens without an entry keep their original text, braces included.
/// Keys in `values` that name no token are ignored.
pub fn resolve(template: &str, values: &HashMap<String, String>) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Every token with no value or a whitespace-only value, in token order.
///
/// An empty result means the template is ready to execute; a non-empty
/// result must block execution and be surfaced as the list of missing
/// fields, never as a generic error.
pub fn unfilled_tokens(tokens: &[String], values: &HashMap<String, String>) -> Vec<String> {
    tokens
        .iter()
        .filter(|name| {
            values
                .get(name.as_str())
                .map_or(true, |v| v.trim().is_empty())
        })
        .cloned()
        .collect()
}

/// Pick an input affordance from the token name.
///
/// Case-insensitive substring rules in fixed priority order: `date` is
/// checked before the numeric keywords so a name like `date_limit` gets a
/// date widget. Classification never affects the resolved SQL.
pub fn classify_token(name: &str) -> TokenKind {
    let name = name.to_lowercase();
    if name.contains("date") {
        TokenKind::Date
    } else if name.contains("price")
        || name.contains("amount")
        || name.contains("count")
        || name.contains("limit")
    {
        TokenKind::Numeric
    } else {
        TokenKind::Text
    }
}

/// Example text for a token's input field.
pub fn input_hint(name: &str) -> String {
    let lower = name.to_lowercase();
    if lower.contains("date") {
        "YYYY-MM-DD".to_string()
    } else if lower.contains("price") || lower.contains("amount") {
        "e.g., 100.00".to_string()
    } else if lower.contains("count") || lower.contains("limit") {
        "e.g., 10".to_string()
    } else if lower.contains("id") {
        "e.g., 123".to_string()
    } else if lower.contains("status") {
        "e.g., active".to_string()
    } else {
        format!("Enter {}", name)
    }
}

/// Extract tokens and attach the display metadata the dashboard renders
/// input fields from.
pub fn token_specs(template: &str) -> Vec<TokenSpec> {
    extract_tokens(template)
        .into_iter()
        .map(|name| {
            let kind = classify_token(&name);
            let hint = input_hint(&name);
            TokenSpec { name, kind, hint }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_extract_no_braces() {
        assert!(extract_tokens("SELECT * FROM customers").is_empty());
    }

    #[test]
    fn test_extract_order_preserved() {
        let tokens = extract_tokens("SELECT * FROM x WHERE id = {id} AND status = {status}");
        assert_eq!(tokens, vec!["id", "status"]);
    }

    #[test]
    fn test_extract_duplicates_collapsed() {
        assert_eq!(extract_tokens("{a}{a}{b}"), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_dangling_open_brace() {
        assert!(extract_tokens("WHERE id = {id").is_empty());
    }

    #[test]
    fn test_extract_empty_name_ignored() {
        assert!(extract_tokens("WHERE id = {}").is_empty());
    }

    #[test]
    fn test_extract_nested_open_brace() {
        // "a{b" is not a valid name; the inner pair still matches
        assert_eq!(extract_tokens("{a{b}"), vec!["b"]);
    }

    #[test]
    fn test_extract_case_sensitive() {
        assert_eq!(extract_tokens("{ID} {id}"), vec!["ID", "id"]);
    }

    #[test]
    fn test_resolve_plain_string_unchanged() {
        let v = values(&[("id", "42")]);
        assert_eq!(resolve("SELECT 1", &v), "SELECT 1");
    }

    #[test]
    fn test_resolve_empty_values_noop() {
        let template = "WHERE id = {id} AND n = {n}";
        assert_eq!(resolve(template, &HashMap::new()), template);
    }

    #[test]
    fn test_resolve_single_token() {
        let v = values(&[("id", "42")]);
        assert_eq!(resolve("WHERE id = {id}", &v), "WHERE id = 42");
    }

    #[test]
    fn test_resolve_all_occurrences() {
        let v = values(&[("id", "42")]);
        assert_eq!(resolve("{id} = {id}", &v), "42 = 42");
    }

    #[test]
    fn test_resolve_unfilled_left_verbatim() {
        let v = values(&[("id", "42")]);
        assert_eq!(
            resolve("WHERE id = {id} AND n = {n}", &v),
            "WHERE id = 42 AND n = {n}"
        );
    }

    #[test]
    fn test_resolve_superset_keys_ignored() {
        let v = values(&[("id", "42"), ("unused", "x")]);
        assert_eq!(resolve("WHERE id = {id}", &v), "WHERE id = 42");
    }

    #[test]
    fn test_resolve_does_not_rescan_replacement() {
        let v = values(&[("a", "{b}"), ("b", "boom")]);
        assert_eq!(resolve("{a}", &v), "{b}");
    }

    #[test]
    fn test_unfilled_whitespace_counts_as_missing() {
        let tokens = vec!["id".to_string(), "n".to_string()];
        let v = values(&[("id", "42"), ("n", "  ")]);
        assert_eq!(unfilled_tokens(&tokens, &v), vec!["n"]);
    }

    #[test]
    fn test_unfilled_absent_entry() {
        let tokens = vec!["id".to_string(), "n".to_string()];
        let v = values(&[("id", "42")]);
        assert_eq!(unfilled_tokens(&tokens, &v), vec!["n"]);
    }

    #[test]
    fn test_unfilled_empty_means_ready() {
        let tokens = vec!["id".to_string()];
        let v = values(&[("id", "42")]);
        assert!(unfilled_tokens(&tokens, &v).is_empty());
    }

    #[test]
    fn test_classify_date() {
        assert_eq!(classify_token("start_date"), TokenKind::Date);
    }

    #[test]
    fn test_classify_numeric() {
        assert_eq!(classify_token("max_limit"), TokenKind::Numeric);
        assert_eq!(classify_token("total_amount"), TokenKind::Numeric);
        assert_eq!(classify_token("unit_price"), TokenKind::Numeric);
        assert_eq!(classify_token("order_count"), TokenKind::Numeric);
    }

    #[test]
    fn test_classify_free_text() {
        assert_eq!(classify_token("customer_name"), TokenKind::Text);
    }

    #[test]
    fn test_classify_date_beats_numeric() {
        assert_eq!(classify_token("date_limit"), TokenKind::Date);
    }

    #[test]
    fn test_input_hints() {
        assert_eq!(input_hint("start_date"), "YYYY-MM-DD");
        assert_eq!(input_hint("unit_price"), "e.g., 100.00");
        assert_eq!(input_hint("row_limit"), "e.g., 10");
        assert_eq!(input_hint("customer_id"), "e.g., 123");
        assert_eq!(input_hint("order_status"), "e.g., active");
        assert_eq!(input_hint("region"), "Enter region");
    }

    #[test]
    fn test_token_specs() {
        let specs = token_specs("WHERE created > {start_date} LIMIT {max_limit}");
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "start_date");
        assert_eq!(specs[0].kind, TokenKind::Date);
        assert_eq!(specs[1].name, "max_limit");
        assert_eq!(specs[1].kind, TokenKind::Numeric);
    }
}
