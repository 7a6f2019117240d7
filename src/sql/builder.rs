//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the `items` table.

use crate::model::ItemFilter;

pub const ITEM_COLUMNS: &str = "id, name, description, created_at";

pub const INSERT_ITEM: &str = "INSERT INTO items (name, description) VALUES (?, ?)";
pub const SELECT_ITEM_BY_ID: &str = "SELECT id, name, description, created_at FROM items WHERE id = ?";
pub const UPDATE_ITEM: &str = "UPDATE items SET name = ?, description = ? WHERE id = ?";
pub const DELETE_ITEM: &str = "DELETE FROM items WHERE id = ?";
/// Fails when the table is missing; returns at most one row otherwise.
pub const CHECK_ITEMS_TABLE: &str = "SELECT 1 FROM items LIMIT 1";

/// Escape character declared on every `LIKE` clause.
const LIKE_ESCAPE: char = '\\';

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: String) {
        self.params.push(v);
    }
}

/// `%value%` with LIKE metacharacters escaped, so the match is a literal substring test.
pub fn like_pattern(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('%');
    for c in value.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out.push('%');
    out
}

/// SELECT list with optional substring filters combined with AND. No ORDER BY.
pub fn select_list(filter: &ItemFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM items", ITEM_COLUMNS);

    let mut clauses: Vec<String> = Vec::new();
    let filters = [("name", filter.name()), ("description", filter.description())];
    for (column, value) in filters {
        if let Some(value) = value {
            clauses.push(format!("{} LIKE ? ESCAPE '{}'", column, LIKE_ESCAPE));
            q.push_param(like_pattern(value));
        }
    }
    if !clauses.is_empty() {
        q.sql.push_str(" WHERE ");
        q.sql.push_str(&clauses.join(" AND "));
    }
    q
}
