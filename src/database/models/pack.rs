use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pack {
    pub pack_id: i64,
    pub pack_name: String,
    pub release_date: Option<NaiveDate>,
    pub pack_image_url: Option<String>,
    pub series: Option<String>,
}
