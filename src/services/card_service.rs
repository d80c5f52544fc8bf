use std::collections::HashMap;

use sqlx::PgPool;

use crate::catalog::{CardFilters, CardQuery};
use crate::database::manager::DatabaseError;
use crate::database::models::CollectedCardWithCategory;
use crate::types::{CardDto, CollectionInfo};

/// Dynamic catalog search. Each present filter narrows the result; pack
/// and rarity come back in the same fetch. When a caller identity is
/// present, each card is annotated with the caller's categories that
/// already contain it.
pub async fn search(
    pool: &PgPool,
    username: Option<&str>,
    filters: &CardFilters,
) -> Result<Vec<CardDto>, DatabaseError> {
    let cards = CardQuery::new(filters).fetch(pool).await?;

    let mut collected = match username {
        Some(username) => collection_annotations(pool, username).await?,
        None => HashMap::new(),
    };

    Ok(cards
        .into_iter()
        .map(|card| {
            let collections = collected.remove(&card.card_id).unwrap_or_default();
            CardDto::from_details(card, collections)
        })
        .collect())
}

/// One query for all of the user's collected cards with their category
/// names and colors, grouped by card id
async fn collection_annotations(
    pool: &PgPool,
    username: &str,
) -> Result<HashMap<i64, Vec<CollectionInfo>>, DatabaseError> {
    let rows = sqlx::query_as::<_, CollectedCardWithCategory>(
        "SELECT cc.card_id, cat.category_name, cat.theme_color \
         FROM collected_cards cc \
         JOIN collection_categories cat ON cat.category_id = cc.category_id \
         JOIN users u ON u.user_id = cat.user_id \
         WHERE u.username = $1",
    )
    .bind(username)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<i64, Vec<CollectionInfo>> = HashMap::new();
    for row in rows {
        grouped.entry(row.card_id).or_default().push(CollectionInfo {
            category_name: row.category_name,
            theme_color: row.theme_color,
        });
    }
    Ok(grouped)
}
