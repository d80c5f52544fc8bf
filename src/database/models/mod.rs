pub mod card;
pub mod category;
pub mod collected_card;
pub mod pack;
pub mod rarity;
pub mod user;

pub use card::{Card, CardWithDetails};
pub use category::{CategoryWithOwner, CollectionCategory};
pub use collected_card::{CollectedCard, CollectedCardWithCategory};
pub use pack::Pack;
pub use rarity::Rarity;
pub use user::User;
