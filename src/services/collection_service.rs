//! Per-user collection management. Every detail-reading and mutating
//! operation starts with the same ownership check: the category's owner
//! username must equal the requester. Unknown ids report not-found
//! before the ownership check runs.

use sqlx::PgPool;

use crate::database::is_unique_violation;
use crate::database::models::{CardWithDetails, CategoryWithOwner, CollectedCard};
use crate::types::{CardDto, CategoryDetailDto, CategoryDto, CategoryRequest};

const DEFAULT_THEME_COLOR: &str = "#FFFFFF";

#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Collected card entry not found: {0}")]
    EntryNotFound(String),

    #[error("Not the owner of this category")]
    NotOwner(String),

    #[error("Card already collected in this category")]
    AlreadyCollected(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Resolve the category with its owner and enforce ownership.
/// Every category operation funnels through here.
async fn load_owned_category(
    pool: &PgPool,
    category_id: i64,
    requester: &str,
) -> Result<CategoryWithOwner, CollectionError> {
    let category = sqlx::query_as::<_, CategoryWithOwner>(
        "SELECT c.category_id, c.category_name, c.theme_color, c.category_type, c.user_id, \
                u.username AS owner_username \
         FROM collection_categories c \
         JOIN users u ON u.user_id = c.user_id \
         WHERE c.category_id = $1",
    )
    .bind(category_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| CollectionError::CategoryNotFound(format!("Category {} not found", category_id)))?;

    if category.owner_username != requester {
        return Err(CollectionError::NotOwner(
            "You do not have access to this category".to_string(),
        ));
    }
    Ok(category)
}

async fn resolve_user_id(pool: &PgPool, username: &str) -> Result<i64, CollectionError> {
    sqlx::query_scalar::<_, i64>("SELECT user_id FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| CollectionError::UserNotFound(format!("User not found: {}", username)))
}

/// All categories owned by the user
pub async fn categories_for_user(
    pool: &PgPool,
    username: &str,
) -> Result<Vec<CategoryDto>, CollectionError> {
    let user_id = resolve_user_id(pool, username).await?;

    let categories = sqlx::query_as::<_, crate::database::models::CollectionCategory>(
        "SELECT category_id, category_name, theme_color, category_type, user_id \
         FROM collection_categories WHERE user_id = $1 ORDER BY category_id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(categories.into_iter().map(CategoryDto::from).collect())
}

pub async fn create_category(
    pool: &PgPool,
    username: &str,
    request: &CategoryRequest,
) -> Result<CategoryDto, CollectionError> {
    let user_id = resolve_user_id(pool, username).await?;
    let theme_color = request.theme_color.as_deref().unwrap_or(DEFAULT_THEME_COLOR);

    let category = sqlx::query_as::<_, crate::database::models::CollectionCategory>(
        "INSERT INTO collection_categories (category_name, theme_color, category_type, user_id) \
         VALUES ($1, $2, $3, $4) \
         RETURNING category_id, category_name, theme_color, category_type, user_id",
    )
    .bind(&request.category_name)
    .bind(theme_color)
    .bind(&request.category_type)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(CategoryDto::from(category))
}

/// Category plus every collected card expanded with pack/rarity data,
/// fetched in one join to avoid per-card queries
pub async fn category_detail(
    pool: &PgPool,
    category_id: i64,
    requester: &str,
) -> Result<CategoryDetailDto, CollectionError> {
    let category = load_owned_category(pool, category_id, requester).await?;

    let cards = sqlx::query_as::<_, CardWithDetails>(
        "SELECT c.card_id, c.card_name, c.card_image_url, c.card_number_in_pack, \
                c.card_type, c.card_attribute, p.pack_name, r.rarity_id, r.rarity_name \
         FROM collected_cards cc \
         JOIN cards c ON c.card_id = cc.card_id \
         LEFT JOIN packs p ON p.pack_id = c.pack_id \
         LEFT JOIN rarities r ON r.rarity_id = c.rarity_id \
         WHERE cc.category_id = $1 \
         ORDER BY cc.collected_card_id",
    )
    .bind(category_id)
    .fetch_all(pool)
    .await?;

    Ok(CategoryDetailDto {
        category_id: category.category_id,
        category_name: category.category_name,
        theme_color: category.theme_color,
        category_type: category.category_type,
        collected_cards: cards
            .into_iter()
            .map(|card| CardDto::from_details(card, vec![]))
            .collect(),
    })
}

/// Overwrite name/type/color; color falls back to the default when null
pub async fn update_category(
    pool: &PgPool,
    category_id: i64,
    requester: &str,
    request: &CategoryRequest,
) -> Result<CategoryDto, CollectionError> {
    load_owned_category(pool, category_id, requester).await?;
    let theme_color = request.theme_color.as_deref().unwrap_or(DEFAULT_THEME_COLOR);

    let category = sqlx::query_as::<_, crate::database::models::CollectionCategory>(
        "UPDATE collection_categories \
         SET category_name = $1, theme_color = $2, category_type = $3 \
         WHERE category_id = $4 \
         RETURNING category_id, category_name, theme_color, category_type, user_id",
    )
    .bind(&request.category_name)
    .bind(theme_color)
    .bind(&request.category_type)
    .bind(category_id)
    .fetch_one(pool)
    .await?;

    Ok(CategoryDto::from(category))
}

/// Delete a category and all of its collected cards atomically.
/// Children are removed explicitly inside the transaction rather than
/// relying on the FK cascade alone.
pub async fn delete_category(
    pool: &PgPool,
    category_id: i64,
    requester: &str,
) -> Result<(), CollectionError> {
    load_owned_category(pool, category_id, requester).await?;

    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM collected_cards WHERE category_id = $1")
        .bind(category_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM collection_categories WHERE category_id = $1")
        .bind(category_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

/// Place a card into a category. The unique (category, card) constraint
/// is the authoritative duplicate guard; the pre-check only gives the
/// common case a friendlier path.
pub async fn add_card(
    pool: &PgPool,
    category_id: i64,
    card_id: i64,
    requester: &str,
) -> Result<CollectedCard, CollectionError> {
    load_owned_category(pool, category_id, requester).await?;

    let card_exists = sqlx::query_scalar::<_, i64>("SELECT card_id FROM cards WHERE card_id = $1")
        .bind(card_id)
        .fetch_optional(pool)
        .await?;
    if card_exists.is_none() {
        return Err(CollectionError::CardNotFound(format!(
            "Card {} not found",
            card_id
        )));
    }

    let duplicate = sqlx::query_scalar::<_, i64>(
        "SELECT collected_card_id FROM collected_cards WHERE category_id = $1 AND card_id = $2",
    )
    .bind(category_id)
    .bind(card_id)
    .fetch_optional(pool)
    .await?;
    if duplicate.is_some() {
        return Err(CollectionError::AlreadyCollected(
            "This card is already collected in this category".to_string(),
        ));
    }

    let result = sqlx::query_as::<_, CollectedCard>(
        "INSERT INTO collected_cards (category_id, card_id) VALUES ($1, $2) \
         RETURNING collected_card_id, category_id, card_id",
    )
    .bind(category_id)
    .bind(card_id)
    .fetch_one(pool)
    .await;

    match result {
        Ok(collected) => Ok(collected),
        // Concurrent identical requests race the pre-check; the storage
        // constraint is translated to the same conflict signal
        Err(e) if is_unique_violation(&e) => Err(CollectionError::AlreadyCollected(
            "This card is already collected in this category".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn remove_card(
    pool: &PgPool,
    category_id: i64,
    card_id: i64,
    requester: &str,
) -> Result<(), CollectionError> {
    load_owned_category(pool, category_id, requester).await?;

    let deleted = sqlx::query_scalar::<_, i64>(
        "DELETE FROM collected_cards WHERE category_id = $1 AND card_id = $2 \
         RETURNING collected_card_id",
    )
    .bind(category_id)
    .bind(card_id)
    .fetch_optional(pool)
    .await?;

    if deleted.is_none() {
        return Err(CollectionError::EntryNotFound(format!(
            "Card {} is not collected in category {}",
            card_id, category_id
        )));
    }
    Ok(())
}
