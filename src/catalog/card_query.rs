use serde::Deserialize;
use sqlx::postgres::PgArguments;
use sqlx::{PgPool, Postgres};

use crate::database::manager::DatabaseError;
use crate::database::models::CardWithDetails;

/// Optional catalog filters as they arrive on the query string.
/// Absent fields contribute no predicate.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CardFilters {
    #[serde(rename = "packId")]
    pub pack_id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "rarityId")]
    pub rarity_id: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    #[serde(rename = "attribute")]
    pub card_attribute: Option<String>,
}

/// A bound query parameter; kept as an enum so the builder can be
/// inspected in tests without touching a database
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Int(i64),
    Text(String),
}

/// Builds the dynamic card search: independent predicate clauses
/// accumulated with `$n` placeholders and AND-combined. Pack and rarity
/// are eager-loaded in the same fetch; DISTINCT guards against row
/// multiplication from the joins.
pub struct CardQuery {
    conditions: Vec<String>,
    params: Vec<QueryParam>,
}

const SELECT_CLAUSE: &str = "SELECT DISTINCT c.card_id, c.card_name, c.card_image_url, \
     c.card_number_in_pack, c.card_type, c.card_attribute, \
     p.pack_name, r.rarity_id, r.rarity_name \
     FROM cards c \
     LEFT JOIN packs p ON p.pack_id = c.pack_id \
     LEFT JOIN rarities r ON r.rarity_id = c.rarity_id";

impl CardQuery {
    pub fn new(filters: &CardFilters) -> Self {
        let mut query = Self {
            conditions: vec![],
            params: vec![],
        };

        if let Some(pack_id) = filters.pack_id {
            query.push("c.pack_id", "=", QueryParam::Int(pack_id));
        }
        if let Some(name) = non_empty(&filters.name) {
            // Case-sensitive substring containment over the display name
            let pattern = format!("%{}%", escape_like(name));
            query.push_raw(format!("c.card_name LIKE ${} ESCAPE '\\'", query.next_index()));
            query.params.push(QueryParam::Text(pattern));
        }
        if let Some(rarity_id) = non_empty(&filters.rarity_id) {
            query.push("c.rarity_id", "=", QueryParam::Text(rarity_id.to_string()));
        }
        if let Some(card_type) = non_empty(&filters.card_type) {
            query.push("c.card_type", "=", QueryParam::Text(card_type.to_string()));
        }
        if let Some(attribute) = non_empty(&filters.card_attribute) {
            query.push("c.card_attribute", "=", QueryParam::Text(attribute.to_string()));
        }

        query
    }

    fn next_index(&self) -> usize {
        self.params.len() + 1
    }

    fn push(&mut self, column: &str, operator: &str, param: QueryParam) {
        self.conditions
            .push(format!("{} {} ${}", column, operator, self.next_index()));
        self.params.push(param);
    }

    fn push_raw(&mut self, condition: String) {
        self.conditions.push(condition);
    }

    /// Render the full SQL and its parameter list
    pub fn to_sql(&self) -> (String, Vec<QueryParam>) {
        let mut sql = SELECT_CLAUSE.to_string();
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        // Stable catalog order
        sql.push_str(" ORDER BY c.card_id");
        (sql, self.params.clone())
    }

    /// Execute against the pool, returning cards with pack/rarity expanded
    pub async fn fetch(&self, pool: &PgPool) -> Result<Vec<CardWithDetails>, DatabaseError> {
        let (sql, params) = self.to_sql();
        let mut q = sqlx::query_as::<Postgres, CardWithDetails>(&sql);
        for p in params {
            q = bind_param(q, p);
        }
        let rows = q.fetch_all(pool).await?;
        Ok(rows)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Escape LIKE metacharacters so user input matches literally
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '\\' || c == '%' || c == '_' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn bind_param<'q>(
    q: sqlx::query::QueryAs<'q, Postgres, CardWithDetails, PgArguments>,
    p: QueryParam,
) -> sqlx::query::QueryAs<'q, Postgres, CardWithDetails, PgArguments> {
    match p {
        QueryParam::Int(i) => q.bind(i),
        QueryParam::Text(s) => q.bind(s),
    }
}
