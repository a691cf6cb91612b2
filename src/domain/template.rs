use serde::{Deserialize, Serialize};

/// Input affordance for a placeholder, chosen from its name.
///
/// Classification only drives the widget and example text the dashboard
/// renders for a token; it has no effect on the resolved SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Date,
    Numeric,
    Text,
}

/// A placeholder discovered in a generated SQL template, enriched with the
/// display metadata the dashboard needs to render an input field for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpec {
    pub name: String,
    pub kind: TokenKind,
    pub hint: String,
}

/// A generated SQL template together with its placeholder metadata,
/// ready for the dashboard to collect values against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuery {
    pub sql: String,
    pub placeholders: Vec<TokenSpec>,
}
