pub mod card_query;

pub use card_query::{CardFilters, CardQuery};
