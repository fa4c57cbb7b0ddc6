pub mod favorites;
pub mod history;
pub mod search;

pub use favorites::{FavoriteAction, FavoriteService};
pub use history::HistoryService;
pub use search::{SearchError, SearchService};
