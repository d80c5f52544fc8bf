use std::cmp::Ordering;

use sqlx::PgPool;

use crate::database::models::Pack;
use crate::types::PackDto;

/// Full pack listing, release date ascending with unknown dates last
pub async fn list(pool: &PgPool) -> Result<Vec<PackDto>, sqlx::Error> {
    let mut packs = sqlx::query_as::<_, Pack>(
        "SELECT pack_id, pack_name, release_date, pack_image_url, series FROM packs",
    )
    .fetch_all(pool)
    .await?;

    packs.sort_by(release_date_order);
    Ok(packs.into_iter().map(PackDto::from).collect())
}

fn release_date_order(a: &Pack, b: &Pack) -> Ordering {
    match (a.release_date, b.release_date) {
        (None, None) => a.pack_id.cmp(&b.pack_id),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(da), Some(db)) => da.cmp(&db),
    }
}
