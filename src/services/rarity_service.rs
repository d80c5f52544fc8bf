use sqlx::PgPool;

use crate::database::models::Rarity;
use crate::types::RarityDto;

/// Full rarity listing, ascending by rarity code
pub async fn list(pool: &PgPool) -> Result<Vec<RarityDto>, sqlx::Error> {
    let rarities = sqlx::query_as::<_, Rarity>(
        "SELECT rarity_id, rarity_name, rarity_description FROM rarities ORDER BY rarity_id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rarities.into_iter().map(RarityDto::from).collect())
}
