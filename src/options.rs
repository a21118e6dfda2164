//! Typed per-call search options.
//!
//! Replaces a loosely-typed option bag with an explicit structure
//! enumerating the recognised options (`page`, `page_size`, `filter`,
//! `fields`, `sort`) and their defaults. The string forms the backend's
//! callers traditionally used — comma-separated field lists, comma sort
//! lists, string-or-clauses filters — survive as explicit constructors.

use serde::{Deserialize, Serialize};

/// Filter expression for a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// A complete filter expression, passed through after operator rewriting.
    Expr(String),
    /// Clause fragments: each inner list is concatenated into one clause,
    /// and the clauses are AND-joined.
    Clauses(Vec<Vec<String>>),
}

impl Filter {
    /// Render to the backend's filter syntax.
    ///
    /// Clause fragments are concatenated with no separator and clauses
    /// joined with `" AND "`. Every `<>` in the resulting expression is
    /// rewritten to `!=` — the backend's query language has no `<>`
    /// operator.
    pub fn render(&self) -> String {
        let joined = match self {
            Self::Expr(expr) => expr.clone(),
            Self::Clauses(clauses) => clauses
                .iter()
                .map(|fragments| fragments.concat())
                .collect::<Vec<_>>()
                .join(" AND "),
        };
        joined.replace("<>", "!=")
    }

    /// Build a clause-list filter from fragment lists.
    pub fn clauses<C, F>(clauses: C) -> Self
    where
        C: IntoIterator,
        C::Item: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self::Clauses(
            clauses
                .into_iter()
                .map(|fragments| fragments.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

impl From<&str> for Filter {
    fn from(expr: &str) -> Self {
        Self::Expr(expr.to_string())
    }
}

impl From<String> for Filter {
    fn from(expr: String) -> Self {
        Self::Expr(expr)
    }
}

/// A single sort directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Field to sort by.
    pub field: String,
    /// Sort direction; `false` is ascending.
    pub descending: bool,
}

impl SortKey {
    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    /// Parse a comma-separated sort list.
    ///
    /// Each token is either `field` (ascending) or `field direction`,
    /// where a `desc` direction (case-insensitive) sorts descending and
    /// any other direction token ascending. Empty tokens are skipped.
    pub fn parse_list(input: &str) -> Vec<SortKey> {
        input.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| match token.split_once(' ') {
                Some((field, direction)) => SortKey {
                    field: field.trim().to_string(),
                    descending: direction.trim().eq_ignore_ascii_case("desc"),
                },
                None => SortKey::asc(token),
            })
            .collect()
    }

    /// Wire form: `-field` descending, `+field` ascending.
    pub fn render(&self) -> String {
        if self.descending {
            format!("-{}", self.field)
        } else {
            format!("+{}", self.field)
        }
    }
}

/// Options for one search invocation.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Zero-based page index.
    pub page: u32,
    /// Results per page; the request offset is `page * page_size`.
    pub page_size: u32,
    /// Filter expression, if any.
    pub filter: Option<Filter>,
    /// Fields to fetch. Empty means the backend's default field set.
    pub fields: Vec<String>,
    /// Sort directives, applied in order.
    pub sort: Vec<SortKey>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 100,
            filter: None,
            fields: Vec::new(),
            sort: Vec::new(),
        }
    }
}

/// Split a comma-separated field list into an ordered field sequence.
pub fn split_fields(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}
