pub use super::favorites::Entity as Favorites;
pub use super::search_history::Entity as SearchHistory;
